pub mod catalog;
pub mod guard;
pub mod models;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub mod drafts;
pub mod favorites;
pub mod notifications;
pub mod session;

pub use drafts::{generate_listing_id, DraftStore, MAX_DRAFTS};
pub use favorites::FavoritesStore;
pub use guard::RouteDecision;
pub use models::{ItemId, Listing, Product, User, UserType};
pub use notifications::{NewNotification, Notification, NotificationKind, NotificationsStore};
pub use session::{validate_email, EmailDomainError, SessionStore};
pub use storage::KeyValueStorage;
