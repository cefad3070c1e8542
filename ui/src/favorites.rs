//! Favorites context and hooks for the UI.

use dioxus::prelude::*;
use store::FavoritesStore;

use crate::backing::{make_storage, AppStorage};

/// Get the favorites store. Persisted mutations go through `write()`.
pub fn use_favorites() -> Signal<FavoritesStore<AppStorage>> {
    use_context::<Signal<FavoritesStore<AppStorage>>>()
}

/// Provider component that owns the favorites store.
#[component]
pub fn FavoritesProvider(children: Element) -> Element {
    let favorites = use_signal(|| FavoritesStore::new(make_storage()));
    use_context_provider(|| favorites);

    rsx! {
        {children}
    }
}
