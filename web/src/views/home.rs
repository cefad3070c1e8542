use dioxus::prelude::*;
use store::catalog::filter_by_category;
use store::Product;
use ui::{Categories, Footer, Navbar, ProductCard};

use crate::data;
use crate::views::Protected;

#[component]
pub fn Home() -> Element {
    let drafts = ui::use_drafts();
    let mut selected = use_signal(|| Option::<String>::None);

    let category = selected();
    let trending = filter_by_category(&data::trending_products(), category.as_deref());

    // Submitted listings lead the recent grid, newest first.
    let mut recent: Vec<Product> = drafts
        .read()
        .listings()
        .iter()
        .map(|l| l.as_product())
        .collect();
    recent.extend(data::recent_products());
    let recent = filter_by_category(&recent, category.as_deref());

    rsx! {
        Protected {
            div { class: "page",
                Navbar {}
                Categories {
                    selected: category,
                    on_select: move |choice| selected.set(choice),
                }

                main { class: "container",
                    section { class: "product-section",
                        h2 { "Trending Now" }
                        div { class: "product-grid",
                            for product in trending {
                                ProductCard { key: "{product.id}", product }
                            }
                        }
                    }

                    section { class: "product-section",
                        h2 { "Recent Items" }
                        div { class: "product-grid",
                            for product in recent {
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
