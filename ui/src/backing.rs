//! Shared storage constructor for all platforms.
//!
//! Returns the [`store::KeyValueStorage`] backend the providers build their
//! stores on:
//! - **Web** (WASM + `web` feature): browser localStorage via
//!   [`store::LocalStorage`]
//! - **Native** (desktop shell, tests): in-memory via
//!   [`store::MemoryStorage`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStorage = store::LocalStorage;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStorage = store::MemoryStorage;

/// Create the platform-appropriate storage backend.
pub fn make_storage() -> AppStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        // One shared map per process, so every provider sees the same data
        // the way separate localStorage handles do in the browser.
        use std::sync::OnceLock;
        static SHARED: OnceLock<store::MemoryStorage> = OnceLock::new();
        SHARED.get_or_init(store::MemoryStorage::new).clone()
    }
}
