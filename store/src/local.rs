//! # localStorage-backed storage
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] implementation used on the
//! **web platform**. It writes through to `window.localStorage`, which is
//! what keeps favorites, the session user and submitted listings alive
//! across page reloads.
//!
//! All methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled, or a quota-exceeded
//! write, degrades to "no persisted data" rather than crashing the app.

use crate::storage::KeyValueStorage;

/// Browser localStorage. Zero-size; the window handle is looked up on every
/// call because `web_sys::Storage` is not `Send` and the lookup is cheap.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backing() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backing()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::backing() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("localStorage write failed for key {key:?}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.remove_item(key);
        }
    }
}
