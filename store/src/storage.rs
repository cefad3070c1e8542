//! # Key/value storage seam
//!
//! Everything CampusMarket persists goes through the [`KeyValueStorage`]
//! trait: string keys, string (JSON) values. The same store logic runs
//! against an in-memory map in tests and desktop builds
//! ([`crate::MemoryStorage`]) and against the browser's localStorage on the
//! web ([`crate::LocalStorage`]).
//!
//! ## Well-known keys
//!
//! | Key | Value | Written by |
//! |-----|-------|------------|
//! | [`FAVORITES_KEY`] | JSON array of item ids | [`crate::FavoritesStore`] |
//! | [`DRAFTS_KEY`] | JSON array of submitted listings, newest first, capped at 20 | [`crate::DraftStore`] |
//! | [`SESSION_KEY`] | JSON user record | [`crate::SessionStore`] |
//!
//! ## Error contract
//!
//! Implementations never surface errors. A failed read is `None`, a failed
//! write (quota, unavailable storage) is dropped on the floor. Readers of
//! these keys must treat missing or malformed values as an empty default;
//! nothing in this crate may panic on bad persisted data.

/// Persisted favorite ids.
pub const FAVORITES_KEY: &str = "favorites";

/// Persisted user-submitted listings.
pub const DRAFTS_KEY: &str = "recentProducts";

/// Persisted session user.
pub const SESSION_KEY: &str = "user";

/// Synchronous string key/value storage.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
