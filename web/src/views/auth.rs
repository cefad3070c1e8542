//! Sign-in page with the student/admin role toggle and the email-domain
//! rule enforced before any `login` call.

use dioxus::prelude::*;
use store::session::{ADMIN_EMAIL_DOMAIN, STUDENT_EMAIL_DOMAIN};
use store::{validate_email, User, UserType};
use ui::{push_toast, ToastLevel};

use crate::Route;

#[component]
pub fn Auth() -> Element {
    let mut session = ui::use_session();
    let mut toasts = ui::use_toasts();
    let nav = use_navigator();

    let mut role = use_signal(|| UserType::Student);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // Already signed in: go where the guard would send us anyway.
    if session.read().is_authenticated() {
        match session.read().role() {
            Some(UserType::Admin) => {
                nav.replace(Route::AdminDashboard {});
            }
            _ => {
                nav.replace(Route::Home {});
            }
        }
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let address = email().trim().to_string();
        if address.is_empty() || password().is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        if let Err(err) = validate_email(role(), &address) {
            let message = err.to_string();
            push_toast(&mut toasts, ToastLevel::Error, &message);
            error.set(Some(message));
            return;
        }

        // Mock authentication: the domain check is the only gate.
        let name = address.split('@').next().unwrap_or_default().to_string();
        session.write().login(User {
            name,
            email: address,
            user_type: role(),
        });
        push_toast(
            &mut toasts,
            ToastLevel::Success,
            &format!("Signed in successfully. Welcome as a {}!", role().as_str()),
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
                p { class: "auth-tagline", "Buy and sell items with your fellow students" }

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

                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "{placeholder}",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }

                    button { class: "auth-submit", r#type: "submit", "Sign In" }
                }

                p { class: "auth-links",
                    Link { to: Route::ForgotPassword {}, "Forgot password?" }
                }
                p { class: "auth-links",
                    "Don't have an account? "
                    Link { to: Route::SignUp {}, "Sign up" }
                }
            }
        }
    }
}
