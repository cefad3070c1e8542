//! Admin dashboard. Moderates the submitted listings: search by title or
//! category, remove anything that breaks the rules.

use dioxus::prelude::*;
use store::Listing;
use ui::{push_toast, ToastLevel};

use crate::views::Protected;
use crate::Route;

#[component]
pub fn AdminDashboard() -> Element {
    let mut session = ui::use_session();
    let mut drafts = ui::use_drafts();
    let mut toasts = ui::use_toasts();
    let nav = use_navigator();

    let mut query = use_signal(String::new);

    let listings: Vec<Listing> = {
        let needle = query().to_lowercase();
        drafts
            .read()
            .listings()
            .iter()
            .filter(|l| {
                needle.is_empty()
                    || l.title.to_lowercase().contains(&needle)
                    || l.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    };
    let total = drafts.read().listings().len();

    let logout = move |_| {
        session.write().logout();
        push_toast(&mut toasts, ToastLevel::Info, "Signed out");
        nav.replace(Route::Auth {});
    };

    rsx! {
        Protected { admin_only: true,
            div { class: "page admin-page",
                header { class: "admin-header",
                    h1 { "Admin Dashboard" }
                    button { class: "text-button danger", onclick: logout, "Sign Out" }
                }

                main { class: "container",
                    div { class: "admin-toolbar",
                        input {
                            r#type: "search",
                            placeholder: "Search listings by title or category",
                            value: query(),
                            oninput: move |evt| query.set(evt.value()),
                        }
                        span { class: "admin-count", "{total} listings" }
                    }

                    if listings.is_empty() {
                        div { class: "empty-state",
                            p { "No listings match." }
                        }
                    } else {
                        table { class: "admin-table",
                            thead {
                                tr {
                                    th { "Item" }
                                    th { "Category" }
                                    th { "Price" }
                                    th { "Location" }
                                    th { "Posted" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for listing in listings {
                                    tr { key: "{listing.id}",
                                        td { class: "admin-item",
                                            img { src: "{listing.image}", alt: "" }
                                            span { "{listing.title}" }
                                        }
                                        td { "{listing.category}" }
                                        td { "${listing.price}" }
                                        td { "{listing.location}" }
                                        td { "{listing.date}" }
                                        td {
                                            button {
                                                class: "text-button danger",
                                                onclick: {
                                                    let id = listing.id.clone();
                                                    move |_| {
                                                        drafts.write().remove(&id);
                                                        push_toast(
                                                            &mut toasts,
                                                            ToastLevel::Success,
                                                            "Listing removed",
                                                        );
                                                    }
                                                },
                                                "Remove"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
