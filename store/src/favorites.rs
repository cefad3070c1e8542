//! # Favorites store
//!
//! The set of item ids the user has favorited. Insertion order is kept for
//! display and persistence; membership checks go through a hash index so
//! [`contains`](FavoritesStore::contains) stays O(1).
//!
//! Every mutation synchronously rewrites the full list as a JSON array under
//! [`FAVORITES_KEY`]. Construction reads that key back, defaulting to an
//! empty set when the value is absent or unparseable, since bad persisted data
//! must never crash the app.

use std::collections::HashSet;

use crate::models::ItemId;
use crate::storage::{KeyValueStorage, FAVORITES_KEY};

pub struct FavoritesStore<S: KeyValueStorage> {
    storage: S,
    // `items` holds insertion order, `index` answers membership. The two are
    // only touched together in `add`/`remove`.
    items: Vec<ItemId>,
    index: HashSet<ItemId>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    /// Load persisted favorites; absent or malformed ⇒ empty set.
    pub fn new(storage: S) -> Self {
        let items: Vec<ItemId> = match storage.get(FAVORITES_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!("discarding malformed persisted favorites: {err}");
                Vec::new()
            }),
            None => Vec::new(),
        };

        // Drop duplicates a hand-edited value might carry.
        let mut index = HashSet::new();
        let items = items
            .into_iter()
            .filter(|id| index.insert(id.clone()))
            .collect();

        Self {
            storage,
            items,
            index,
        }
    }

    /// Add an id. No-op if already present; persists on change.
    pub fn add(&mut self, id: impl Into<ItemId>) {
        let id = id.into();
        if self.index.insert(id.clone()) {
            self.items.push(id);
            self.persist();
        }
    }

    /// Remove an id. No-op if absent; persists on change.
    pub fn remove(&mut self, id: impl Into<ItemId>) {
        let id = id.into();
        if self.index.remove(&id) {
            self.items.retain(|item| *item != id);
            self.persist();
        }
    }

    /// Membership test.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.index.contains(id)
    }

    /// Favorited ids in insertion order.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) {
        if let Ok(json) = serde_json::to_string(&self.items) {
            self.storage.set(FAVORITES_KEY, &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    #[test]
    fn add_is_idempotent() {
        let mut favorites = FavoritesStore::new(MemoryStorage::new());

        favorites.add(1u64);
        favorites.add(1u64);
        favorites.add("abc");
        favorites.add(1u64);

        assert_eq!(favorites.items().len(), 2);
        assert!(favorites.contains(&ItemId::Number(1)));
        assert!(favorites.contains(&ItemId::Text("abc".to_string())));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut favorites = FavoritesStore::new(MemoryStorage::new());
        favorites.add(1u64);

        favorites.remove(2u64);
        favorites.remove("nope");
        assert_eq!(favorites.items().len(), 1);

        favorites.remove(1u64);
        assert!(favorites.is_empty());
        assert!(!favorites.contains(&ItemId::Number(1)));
    }

    #[test]
    fn membership_tracks_arbitrary_sequences() {
        let mut favorites = FavoritesStore::new(MemoryStorage::new());

        for id in [3u64, 1, 4, 1, 5, 9, 2, 6, 5, 3] {
            favorites.add(id);
        }
        for id in [1u64, 4, 1] {
            favorites.remove(id);
        }

        let expected: HashSet<ItemId> = [3u64, 5, 9, 2, 6].map(ItemId::Number).into();
        let actual: HashSet<ItemId> = favorites.items().iter().cloned().collect();
        assert_eq!(actual, expected);
        assert_eq!(favorites.items().len(), expected.len());

        for n in 0u64..10 {
            let id = ItemId::Number(n);
            assert_eq!(favorites.contains(&id), expected.contains(&id));
        }
    }

    #[test]
    fn round_trip_preserves_set() {
        let storage = MemoryStorage::new();

        let mut favorites = FavoritesStore::new(storage.clone());
        favorites.add(2u64);
        favorites.add("x9k2mf0q1");
        favorites.add(7u64);
        favorites.remove(2u64);

        let reloaded = FavoritesStore::new(storage);
        let before: HashSet<ItemId> = favorites.items().iter().cloned().collect();
        let after: HashSet<ItemId> = reloaded.items().iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn malformed_persisted_value_yields_empty_set() {
        let storage = MemoryStorage::new();
        storage.set(FAVORITES_KEY, "not json at all");

        let favorites = FavoritesStore::new(storage.clone());
        assert!(favorites.is_empty());

        // A non-array JSON value is just as invalid.
        storage.set(FAVORITES_KEY, r#"{"id": 1}"#);
        let favorites = FavoritesStore::new(storage);
        assert!(favorites.is_empty());
    }

    #[test]
    fn persisted_duplicates_are_dropped_on_load() {
        let storage = MemoryStorage::new();
        storage.set(FAVORITES_KEY, "[1,1,2]");

        let favorites = FavoritesStore::new(storage);
        assert_eq!(favorites.items(), &[ItemId::Number(1), ItemId::Number(2)]);
    }
}
