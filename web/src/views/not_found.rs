use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page",
            main { class: "container narrow empty-state",
                h1 { "404" }
                p { "The page /{path} does not exist." }
                Link { class: "primary-button", to: Route::Home {}, "Go home" }
            }
        }
    }
}
