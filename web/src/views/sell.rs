//! Sell form. A submitted item becomes a [`store::Listing`] in the draft
//! store and shows up at the top of the home page's recent grid.

use dioxus::prelude::*;
use store::catalog::CATEGORIES;
use store::{generate_listing_id, Listing};
use ui::{push_toast, Footer, Navbar, ToastLevel};

use crate::views::Protected;
use crate::Route;

const CONDITIONS: [&str; 4] = ["New", "Like New", "Good", "Fair"];

const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1607082349566-187342175e2f?auto=format&fit=crop&w=2670&q=80";

#[component]
pub fn SellItem() -> Element {
    let mut drafts = ui::use_drafts();
    let mut toasts = ui::use_toasts();
    let nav = use_navigator();

    let mut title = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut category = use_signal(|| CATEGORIES[0].to_string());
    let mut condition = use_signal(|| CONDITIONS[0].to_string());
    let mut location = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let item_title = title().trim().to_string();
        if item_title.is_empty() {
            error.set(Some("Please give your item a title".to_string()));
            return;
        }
        let Ok(amount) = price().trim().parse::<f64>() else {
            error.set(Some("Please enter a valid price".to_string()));
            return;
        };
        if amount < 0.0 {
            error.set(Some("Please enter a valid price".to_string()));
            return;
        }

        let item_image = {
            let url = image().trim().to_string();
            if url.is_empty() {
                FALLBACK_IMAGE.to_string()
            } else {
                url
            }
        };
        let item_location = {
            let spot = location().trim().to_string();
            if spot.is_empty() {
                "On Campus".to_string()
            } else {
                spot
            }
        };

        drafts.write().add(Listing {
            id: generate_listing_id(),
            title: item_title,
            price: amount,
            image: item_image,
            location: item_location,
            date: "Just now".to_string(),
            category: category(),
            description: description().trim().to_string(),
            condition: condition(),
        });
        push_toast(&mut toasts, ToastLevel::Success, "Your item has been listed!");
        nav.replace(Route::Home {});
    };

    rsx! {
        Protected {
            div { class: "page",
                Navbar {}

                main { class: "container narrow",
                    h1 { "Sell an Item" }

                    form { class: "sell-form", onsubmit: handle_submit,
                        if let Some(message) = error() {
                            div { class: "form-error", "{message}" }
                        }

                        label { r#for: "title", "Title" }
                        input {
                            id: "title",
                            r#type: "text",
                            placeholder: "What are you selling?",
                            value: title(),
                            oninput: move |evt| title.set(evt.value()),
                        }

                        label { r#for: "price", "Price ($)" }
                        input {
                            id: "price",
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            placeholder: "0.00",
                            value: price(),
                            oninput: move |evt| price.set(evt.value()),
                        }

                        label { r#for: "category", "Category" }
                        select {
                            id: "category",
                            value: category(),
                            onchange: move |evt| category.set(evt.value()),
                            for name in CATEGORIES {
                                option { value: name, "{name}" }
                            }
                        }

                        label { r#for: "condition", "Condition" }
                        select {
                            id: "condition",
                            value: condition(),
                            onchange: move |evt| condition.set(evt.value()),
                            for name in CONDITIONS {
                                option { value: name, "{name}" }
                            }
                        }

                        label { r#for: "location", "Pickup Location" }
                        input {
                            id: "location",
                            r#type: "text",
                            placeholder: "e.g. Engineering Building",
                            value: location(),
                            oninput: move |evt| location.set(evt.value()),
                        }

                        label { r#for: "image", "Image URL (optional)" }
                        input {
                            id: "image",
                            r#type: "url",
                            placeholder: "https://...",
                            value: image(),
                            oninput: move |evt| image.set(evt.value()),
                        }

                        label { r#for: "description", "Description" }
                        textarea {
                            id: "description",
                            rows: 4,
                            placeholder: "Describe your item",
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }

                        button { class: "primary-button", r#type: "submit", "List Item" }
                    }
                }

                Footer {}
            }
        }
    }
}
