use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaHeart;
use dioxus_free_icons::Icon;
use store::{NewNotification, NotificationKind, Product};

use crate::{notify, use_favorites, use_notifications, use_toasts};

/// A product tile for the home, favorites and admin grids. The heart toggles
/// the favorite; favoriting raises a trending notification.
#[component]
pub fn ProductCard(product: Product) -> Element {
    let mut favorites = use_favorites();
    let mut notifications = use_notifications();
    let mut toasts = use_toasts();

    let favorited = favorites.read().contains(&product.id);

    let toggle = {
        let product = product.clone();
        move |evt: Event<MouseData>| {
            // The card itself links to the detail page.
            evt.stop_propagation();
            if favorited {
                favorites.write().remove(product.id.clone());
            } else {
                favorites.write().add(product.id.clone());
                notify(
                    &mut notifications,
                    &mut toasts,
                    NewNotification {
                        title: format!("{} trending", product.title),
                        message: format!(
                            "{} is getting attention in {}",
                            product.title, product.category
                        ),
                        date: "Just now".to_string(),
                        kind: NotificationKind::Trending {
                            item_id: product.id.clone(),
                            image: Some(product.image.clone()),
                        },
                    },
                );
            }
        }
    };

    rsx! {
        div { class: "product-card",
            Link { to: "/product/{product.id}",
                img { class: "product-card-image", src: "{product.image}", alt: "{product.title}" }
            }
            button {
                class: if favorited { "product-card-heart favorited" } else { "product-card-heart" },
                onclick: toggle,
                Icon { width: 16, height: 16, icon: FaHeart }
            }
            div { class: "product-card-body",
                Link { to: "/product/{product.id}",
                    h3 { "{product.title}" }
                }
                p { class: "product-card-price", "${product.price}" }
                p { class: "product-card-meta", "{product.location} \u{00b7} {product.date}" }
            }
        }
    }
}
