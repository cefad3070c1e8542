//! Notifications context and hooks for the UI.
//!
//! The store itself carries no presentation concerns, so the toast
//! confirmations live here: views mutate through [`notify`] and
//! [`mark_all_read`] rather than writing the signal directly.

use dioxus::prelude::*;
use store::{NewNotification, NotificationsStore};

use crate::toast::{push_toast, ToastLevel, Toasts};

/// Get the notifications store.
pub fn use_notifications() -> Signal<NotificationsStore> {
    use_context::<Signal<NotificationsStore>>()
}

/// Provider component that owns the notifications store, seeded with the
/// sample records. Session-only: nothing here survives a reload.
#[component]
pub fn NotificationsProvider(children: Element) -> Element {
    let notifications = use_signal(NotificationsStore::new);
    use_context_provider(|| notifications);

    rsx! {
        {children}
    }
}

/// Add a notification and confirm it with an info toast.
pub fn notify(
    notifications: &mut Signal<NotificationsStore>,
    toasts: &mut Signal<Toasts>,
    new: NewNotification,
) {
    let title = new.title.clone();
    notifications.write().add(new);
    tracing::info!("notification added: {title}");
    push_toast(toasts, ToastLevel::Info, &format!("New notification: {title}"));
}

/// Mark everything read and confirm with a success toast.
pub fn mark_all_read(notifications: &mut Signal<NotificationsStore>, toasts: &mut Signal<Toasts>) {
    notifications.write().mark_all_as_read();
    push_toast(toasts, ToastLevel::Success, "All notifications marked as read");
}
