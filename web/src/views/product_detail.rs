//! Product detail page. Resolves the `:id` segment against the seeded
//! catalog and the submitted listings; listings additionally show the
//! seller-entered description and condition.

use dioxus::prelude::*;
use store::{ItemId, NewNotification, NotificationKind, Product};
use ui::icons::FaHeart;
use ui::{notify, Footer, Icon, Navbar};

use crate::data;
use crate::views::Protected;
use crate::Route;

/// Detail fields only a submitted listing has.
struct ListingExtras {
    description: String,
    condition: String,
}

fn resolve(id: &str, drafts: &Signal<store::DraftStore<ui::AppStorage>>) -> Option<(Product, Option<ListingExtras>)> {
    if let Some(listing) = drafts.read().listings().iter().find(|l| l.id == id) {
        return Some((
            listing.as_product(),
            Some(ListingExtras {
                description: listing.description.clone(),
                condition: listing.condition.clone(),
            }),
        ));
    }

    let wanted: ItemId = match id.parse::<u64>() {
        Ok(n) => ItemId::Number(n),
        Err(_) => ItemId::Text(id.to_string()),
    };
    data::all_products()
        .into_iter()
        .find(|p| p.id == wanted)
        .map(|p| (p, None))
}

#[component]
pub fn ProductDetail(id: String) -> Element {
    let drafts = ui::use_drafts();
    let mut favorites = ui::use_favorites();
    let mut notifications = ui::use_notifications();
    let mut toasts = ui::use_toasts();

    let Some((product, extras)) = resolve(&id, &drafts) else {
        return rsx! {
            Protected {
                div { class: "page",
                    Navbar {}
                    main { class: "container narrow",
                        h1 { "Item not found" }
                        p { "This item may have been removed." }
                        Link { class: "primary-button", to: Route::Home {}, "Back to browsing" }
                    }
                    Footer {}
                }
            }
        };
    };

    let favorited = favorites.read().contains(&product.id);
    let toggle = {
        let product = product.clone();
        move |_| {
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
        Protected {
            div { class: "page",
                Navbar {}

                main { class: "container",
                    div { class: "product-detail",
                        img {
                            class: "product-detail-image",
                            src: "{product.image}",
                            alt: "{product.title}",
                        }

                        div { class: "product-detail-body",
                            span { class: "product-detail-category", "{product.category}" }
                            h1 { "{product.title}" }
                            p { class: "product-detail-price", "${product.price}" }
                            p { class: "product-detail-meta",
                                "{product.location} \u{00b7} {product.date}"
                            }

                            if let Some(extras) = &extras {
                                p { class: "product-detail-condition", "Condition: {extras.condition}" }
                                if !extras.description.is_empty() {
                                    p { class: "product-detail-description", "{extras.description}" }
                                }
                            }

                            div { class: "product-detail-actions",
                                button {
                                    class: if favorited { "icon-button favorited" } else { "icon-button" },
                                    onclick: toggle,
                                    Icon { width: 18, height: 18, icon: FaHeart }
                                    if favorited { " Saved" } else { " Save" }
                                }
                                Link {
                                    class: "primary-button",
                                    to: Route::Chat { id: product.id.to_string() },
                                    "Chat with Seller"
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
