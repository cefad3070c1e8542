//! # Listing drafts
//!
//! Listings posted through the sell form stand in for a backend: they are
//! persisted as a JSON array under [`DRAFTS_KEY`], newest first, capped at
//! [`MAX_DRAFTS`] entries so repeated submissions cannot blow the storage
//! quota. The admin dashboard moderates the same list via
//! [`remove`](DraftStore::remove).

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::models::Listing;
use crate::storage::{KeyValueStorage, DRAFTS_KEY};

/// Oldest entries beyond this are dropped on every add.
pub const MAX_DRAFTS: usize = 20;

/// Generate a listing id: 9 lowercase alphanumeric characters. Collisions
/// are as unlikely as the original's base-36 random ids; nothing checks for
/// them because nothing did upstream either.
pub fn generate_listing_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

pub struct DraftStore<S: KeyValueStorage> {
    storage: S,
    listings: Vec<Listing>,
}

impl<S: KeyValueStorage> DraftStore<S> {
    /// Load persisted listings; absent or malformed ⇒ empty.
    pub fn new(storage: S) -> Self {
        let listings = match storage.get(DRAFTS_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!("discarding malformed persisted listings: {err}");
                Vec::new()
            }),
            None => Vec::new(),
        };
        Self { storage, listings }
    }

    /// Prepend a listing, drop anything past the cap, persist.
    pub fn add(&mut self, listing: Listing) {
        self.listings.insert(0, listing);
        self.listings.truncate(MAX_DRAFTS);
        self.persist();
    }

    /// Remove a listing by id (admin moderation). No-op if absent.
    pub fn remove(&mut self, id: &str) {
        let before = self.listings.len();
        self.listings.retain(|l| l.id != id);
        if self.listings.len() != before {
            self.persist();
        }
    }

    /// Listings, newest first.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    fn persist(&self) {
        if let Ok(json) = serde_json::to_string(&self.listings) {
            self.storage.set(DRAFTS_KEY, &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn listing(id: &str, title: &str) -> Listing {
        Listing {
            id: id.to_string(),
            title: title.to_string(),
            price: 10.0,
            image: String::new(),
            location: "North Dorms".to_string(),
            date: "Just now".to_string(),
            category: "Books".to_string(),
            description: String::new(),
            condition: "Good".to_string(),
        }
    }

    #[test]
    fn add_prepends_and_persists() {
        let storage = MemoryStorage::new();

        let mut drafts = DraftStore::new(storage.clone());
        drafts.add(listing("a", "first"));
        drafts.add(listing("b", "second"));
        assert_eq!(drafts.listings()[0].id, "b");

        let reloaded = DraftStore::new(storage);
        assert_eq!(reloaded.listings().len(), 2);
        assert_eq!(reloaded.listings()[0].id, "b");
    }

    #[test]
    fn cap_drops_oldest_first() {
        let mut drafts = DraftStore::new(MemoryStorage::new());
        for n in 0..25 {
            drafts.add(listing(&format!("id{n}"), "item"));
        }

        assert_eq!(drafts.listings().len(), MAX_DRAFTS);
        // Newest survives, the five oldest are gone.
        assert_eq!(drafts.listings()[0].id, "id24");
        assert!(drafts.listings().iter().all(|l| l.id != "id0"));
        assert!(drafts.listings().iter().all(|l| l.id != "id4"));
        assert!(drafts.listings().iter().any(|l| l.id == "id5"));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut drafts = DraftStore::new(MemoryStorage::new());
        drafts.add(listing("a", "first"));

        drafts.remove("missing");
        assert_eq!(drafts.listings().len(), 1);

        drafts.remove("a");
        assert!(drafts.listings().is_empty());
    }

    #[test]
    fn malformed_persisted_value_yields_empty_list() {
        let storage = MemoryStorage::new();
        storage.set(DRAFTS_KEY, "[{\"broken\":");

        let drafts = DraftStore::new(storage);
        assert!(drafts.listings().is_empty());
    }

    #[test]
    fn generated_ids_are_nine_lowercase_alphanumerics() {
        for _ in 0..20 {
            let id = generate_listing_id();
            assert_eq!(id.len(), 9);
            assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }
}
