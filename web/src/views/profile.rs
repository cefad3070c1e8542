//! Profile page: account details, a few quick stats, logout.

use dioxus::prelude::*;
use ui::{push_toast, Footer, Navbar, ToastLevel};

use crate::views::Protected;
use crate::Route;

#[component]
pub fn Profile() -> Element {
    let mut session = ui::use_session();
    let favorites = ui::use_favorites();
    let drafts = ui::use_drafts();
    let mut toasts = ui::use_toasts();
    let nav = use_navigator();

    let user = session.read().user().cloned();
    let favorite_count = favorites.read().items().len();
    let listing_count = drafts.read().listings().len();

    let logout = move |_| {
        session.write().logout();
        push_toast(&mut toasts, ToastLevel::Info, "Signed out");
        nav.replace(Route::Auth {});
    };

    rsx! {
        Protected {
            div { class: "page",
                Navbar {}

                main { class: "container narrow",
                    h1 { "My Profile" }

                    if let Some(user) = user {
                        div { class: "profile-card",
                            div { class: "profile-avatar", {initial(&user.name)} }
                            div { class: "profile-details",
                                h2 { "{user.name}" }
                                p { "{user.email}" }
                                span { class: "profile-role", "{user.user_type.as_str()}" }
                            }
                        }

                        div { class: "profile-stats",
                            div { class: "profile-stat",
                                strong { "{favorite_count}" }
                                span { "Favorites" }
                            }
                            div { class: "profile-stat",
                                strong { "{listing_count}" }
                                span { "Listings" }
                            }
                        }

                        div { class: "profile-actions",
                            Link { class: "primary-button", to: Route::SellItem {}, "Sell an Item" }
                            button { class: "text-button danger", onclick: logout, "Sign Out" }
                        }
                    }
                }

                Footer {}
            }
        }
    }
}

fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}
