//! Notifications page. Clicking an entry marks it read; trending entries
//! also link through to the item they mention.

use dioxus::prelude::*;
use store::NotificationKind;
use ui::icons::{FaBell, FaXmark};
use ui::{Footer, Icon, Navbar};

use crate::views::Protected;
use crate::Route;

#[component]
pub fn Notifications() -> Element {
    let mut notifications = ui::use_notifications();
    let mut toasts = ui::use_toasts();
    let nav = use_navigator();

    let entries = notifications.read().items().to_vec();
    let unread = notifications.read().unread_count();

    rsx! {
        Protected {
            div { class: "page",
                Navbar {}

                main { class: "container narrow",
                    div { class: "page-heading",
                        h1 { "Notifications" }
                        if unread > 0 {
                            button {
                                class: "text-button",
                                onclick: move |_| ui::mark_all_read(&mut notifications, &mut toasts),
                                "Mark all as read"
                            }
                        }
                    }

                    if entries.is_empty() {
                        div { class: "empty-state",
                            Icon { width: 32, height: 32, icon: FaBell }
                            p { "No notifications yet." }
                        }
                    } else {
                        ul { class: "notification-list",
                            for entry in entries {
                                li {
                                    key: "{entry.id}",
                                    class: if entry.read { "notification read" } else { "notification" },
                                    onclick: {
                                        let kind = entry.kind.clone();
                                        let id = entry.id;
                                        move |_| {
                                            notifications.write().mark_as_read(id);
                                            if let NotificationKind::Trending { item_id, .. } = &kind {
                                                nav.push(Route::ProductDetail { id: item_id.to_string() });
                                            }
                                        }
                                    },

                                    if let NotificationKind::Trending { image: Some(image), .. } = &entry.kind {
                                        img { class: "notification-image", src: "{image}", alt: "" }
                                    } else {
                                        div { class: "notification-icon",
                                            Icon { width: 18, height: 18, icon: FaBell }
                                        }
                                    }

                                    div { class: "notification-body",
                                        h3 { "{entry.title}" }
                                        p { "{entry.message}" }
                                        span { class: "notification-date", "{entry.date}" }
                                    }

                                    button {
                                        class: "notification-clear",
                                        onclick: {
                                            let id = entry.id;
                                            move |evt: Event<MouseData>| {
                                                evt.stop_propagation();
                                                notifications.write().clear(id);
                                            }
                                        },
                                        Icon { width: 14, height: 14, icon: FaXmark }
                                    }
                                }
                            }
                        }
                    }
                }

                Footer {}
            }
        }
    }
}
