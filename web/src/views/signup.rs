//! Sign-up page. Same email-domain gate as sign-in; a successful submission
//! signs the new account straight in.

use dioxus::prelude::*;
use store::session::{ADMIN_EMAIL_DOMAIN, STUDENT_EMAIL_DOMAIN};
use store::{validate_email, User, UserType};
use ui::{push_toast, ToastLevel};

use crate::Route;

#[component]
pub fn SignUp() -> Element {
    let mut session = ui::use_session();
    let mut toasts = ui::use_toasts();
    let nav = use_navigator();

    let mut role = use_signal(|| UserType::Student);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let full_name = name().trim().to_string();
        let address = email().trim().to_string();
        if full_name.is_empty() || address.is_empty() || password().is_empty() {
            error.set(Some("Please fill in every field".to_string()));
            return;
        }

        if let Err(err) = validate_email(role(), &address) {
            let message = err.to_string();
            push_toast(&mut toasts, ToastLevel::Error, &message);
            error.set(Some(message));
            return;
        }

        session.write().login(User {
            name: full_name,
            email: address,
            user_type: role(),
        });
        push_toast(
            &mut toasts,
            ToastLevel::Success,
            &format!("Signed up successfully. Welcome as a {}!", role().as_str()),
        );

        match role() {
            UserType::Admin => {
                nav.replace(Route::AdminDashboard {});
            }
            UserType::Student => {
                nav.replace(Route::Home {});
            }
        }
    };

    let placeholder = match role() {
        UserType::Student => format!("student{STUDENT_EMAIL_DOMAIN}"),
        UserType::Admin => format!("admin{ADMIN_EMAIL_DOMAIN}"),
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-brand", "CampusMarket" }
                p { class: "auth-tagline", "Create your account" }

                div { class: "auth-roles",
                    span { "I am a:" }
                    button {
                        class: if role() == UserType::Student { "role-button selected" } else { "role-button" },
                        onclick: move |_| role.set(UserType::Student),
                        "Student"
                    }
                    button {
                        class: if role() == UserType::Admin { "role-button selected" } else { "role-button" },
                        onclick: move |_| role.set(UserType::Admin),
                        "Admin"
                    }
                }

                form { class: "auth-form", onsubmit: handle_submit,
                    if let Some(message) = error() {
                        div { class: "form-error", "{message}" }
                    }

                    label { r#for: "name", "Full Name" }
                    input {
                        id: "name",
                        r#type: "text",
                        placeholder: "John Doe",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }

                    label { r#for: "signup-email", "Email" }
                    input {
                        id: "signup-email",
                        r#type: "email",
                        placeholder: "{placeholder}",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }

                    label { r#for: "signup-password", "Password" }
                    input {
                        id: "signup-password",
                        r#type: "password",
                        placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }

                    button { class: "auth-submit", r#type: "submit", "Sign Up" }
                }

                p { class: "auth-links",
                    "Already have an account? "
                    Link { to: Route::Auth {}, "Sign in" }
                }
            }
        }
    }
}
