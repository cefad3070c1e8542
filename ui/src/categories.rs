use dioxus::prelude::*;
use store::catalog::CATEGORIES;

/// Horizontal strip of category chips. Clicking the selected chip clears the
/// selection.
#[component]
pub fn Categories(
    selected: Option<String>,
    on_select: EventHandler<Option<String>>,
) -> Element {
    rsx! {
        div { class: "categories",
            for category in CATEGORIES {
                button {
                    key: "{category}",
                    class: if selected.as_deref() == Some(category) {
                        "category-chip selected"
                    } else {
                        "category-chip"
                    },
                    onclick: {
                        let selected = selected.clone();
                        move |_| {
                            if selected.as_deref() == Some(category) {
                                on_select.call(None);
                            } else {
                                on_select.call(Some(category.to_string()));
                            }
                        }
                    },
                    "{category}"
                }
            }
        }
    }
}
