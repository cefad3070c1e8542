use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::KeyValueStorage;

/// In-memory KeyValueStorage for testing and native fallback.
///
/// Clones share the same underlying map, so two stores built from clones of
/// one `MemoryStorage` observe each other's writes, the same visibility
/// localStorage gives separate stores in the browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get("missing").is_none());

        storage.set("k", "v");
        assert_eq!(storage.get("k").as_deref(), Some("v"));

        storage.remove("k");
        assert!(storage.get("k").is_none());
    }

    #[test]
    fn clones_share_state() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("k", "v");
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }
}
