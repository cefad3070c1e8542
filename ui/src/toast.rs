//! Ephemeral confirmation messages, kept in a signal the same way the
//! notification list is. Toasts stay until dismissed.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast-info",
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    let mut state = toasts.write();
    let id = state.next_id;
    state.next_id += 1;
    state.entries.push(Toast {
        id,
        level,
        message: message.to_string(),
    });
}

/// Provider component: owns the toast list and renders it as an overlay on
/// top of its children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        ToastStack {}
    }
}

#[component]
fn ToastStack() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts().entries {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    span { "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        onclick: {
                            let id = toast.id;
                            move |_| {
                                toasts.write().entries.retain(|t| t.id != id);
                            }
                        },
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}
