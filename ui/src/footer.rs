use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { "CampusMarket: buy and sell with your fellow students" }
            p { class: "footer-fine", "No real payments, no real backend. Campus use only." }
        }
    }
}
