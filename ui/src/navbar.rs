use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBagShopping, FaBell, FaHeart, FaUser};
use dioxus_free_icons::Icon;

use crate::use_notifications;

#[component]
pub fn Navbar() -> Element {
    let notifications = use_notifications();
    let unread = notifications.read().unread_count();

    rsx! {
        document::Link { rel: "stylesheet", href: crate::COMPONENTS_CSS }
        nav {
            class: "navbar",
            Link { class: "navbar-brand", to: "/",
                h1 { "CampusMarket" }
            }

            div { class: "navbar-search",
                input {
                    r#type: "text",
                    placeholder: "Search for items...",
                }
            }

            div { class: "navbar-actions",
                Link { class: "navbar-icon", to: "/notifications",
                    Icon { width: 20, height: 20, icon: FaBell }
                    if unread > 0 {
                        span { class: "navbar-badge", "{unread}" }
                    }
                }
                Link { class: "navbar-icon", to: "/favorites",
                    Icon { width: 20, height: 20, icon: FaHeart }
                }
                Link { class: "navbar-sell", to: "/sell",
                    Icon { width: 16, height: 16, icon: FaBagShopping }
                    span { "Sell" }
                }
                Link { class: "navbar-icon", to: "/profile",
                    Icon { width: 20, height: 20, icon: FaUser }
                }
            }
        }
    }
}
