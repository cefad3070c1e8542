//! Favorites page. Favorite ids are resolved against the catalog and the
//! submitted listings; ids whose item no longer exists are simply skipped.

use dioxus::prelude::*;
use store::{ItemId, Product};
use ui::{push_toast, Footer, Navbar, ProductCard, ToastLevel};

use crate::data;
use crate::views::Protected;
use crate::Route;

#[component]
pub fn Favorites() -> Element {
    let mut favorites = ui::use_favorites();
    let drafts = ui::use_drafts();
    let mut toasts = ui::use_toasts();

    let catalog = data::all_products();
    let saved: Vec<Product> = favorites
        .read()
        .items()
        .iter()
        .filter_map(|id| {
            catalog.iter().find(|p| p.id == *id).cloned().or_else(|| {
                drafts
                    .read()
                    .listings()
                    .iter()
                    .find(|l| ItemId::Text(l.id.clone()) == *id)
                    .map(|l| l.as_product())
            })
        })
        .collect();

    let clear_all = move |_| {
        let ids: Vec<ItemId> = favorites.read().items().to_vec();
        for id in ids {
            favorites.write().remove(id);
        }
        push_toast(&mut toasts, ToastLevel::Success, "Favorites cleared");
    };

    rsx! {
        Protected {
            div { class: "page",
                Navbar {}

                main { class: "container",
                    div { class: "page-heading",
                        h1 { "My Favorites" }
                        if !saved.is_empty() {
                            button { class: "text-button", onclick: clear_all, "Clear all" }
                        }
                    }

                    if saved.is_empty() {
                        div { class: "empty-state",
                            p { "You haven't saved anything yet." }
                            Link { class: "primary-button", to: Route::Home {}, "Browse items" }
                        }
                    } else {
                        div { class: "product-grid",
                            for product in saved {
                                ProductCard { key: "{product.id}", product }
                            }
                        }
                    }
                }

                Footer {}
            }
        }
    }
}
