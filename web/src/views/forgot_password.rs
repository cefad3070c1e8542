use dioxus::prelude::*;
use ui::{push_toast, ToastLevel};

use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let mut toasts = ui::use_toasts();
    let mut email = use_signal(String::new);
    let mut sent = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if email().trim().is_empty() {
            return;
        }
        // Mock flow: nothing is actually sent anywhere.
        sent.set(true);
        push_toast(
            &mut toasts,
            ToastLevel::Success,
            "If that address exists, a reset link is on its way",
        );
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-brand", "CampusMarket" }
                p { class: "auth-tagline", "Reset your password" }

                if sent() {
                    p { "Check your inbox for the reset link." }
                } else {
                    form { class: "auth-form", onsubmit: handle_submit,
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "you@kgkite.ac.in",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                        button { class: "auth-submit", r#type: "submit", "Send reset link" }
                    }
                }

                p { class: "auth-links",
                    Link { to: Route::Auth {}, "Back to sign in" }
                }
            }
        }
    }
}
