//! Listing-drafts context: the submitted listings shared by the sell form,
//! the home grid and the admin dashboard.

use dioxus::prelude::*;
use store::DraftStore;

use crate::backing::{make_storage, AppStorage};

pub fn use_drafts() -> Signal<DraftStore<AppStorage>> {
    use_context::<Signal<DraftStore<AppStorage>>>()
}

/// Provider component that owns the draft store.
#[component]
pub fn DraftsProvider(children: Element) -> Element {
    let drafts = use_signal(|| DraftStore::new(make_storage()));
    use_context_provider(|| drafts);

    rsx! {
        {children}
    }
}
