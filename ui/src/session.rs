//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::SessionStore;

use crate::backing::{make_storage, AppStorage};

/// Get the current session store.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionStore<AppStorage>> {
    use_context::<Signal<SessionStore<AppStorage>>>()
}

/// Provider component that owns the session store.
/// Wrap your app with this component to enable sign-in state.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| SessionStore::new(make_storage()));
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}
