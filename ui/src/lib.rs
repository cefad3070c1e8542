//! This crate contains all shared UI for the workspace: the context
//! providers wrapping the state stores, and the components used on more than
//! one page.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backing;
pub use backing::{make_storage, AppStorage};

mod session;
pub use session::{use_session, SessionProvider};

mod favorites;
pub use favorites::{use_favorites, FavoritesProvider};

mod notifications;
pub use notifications::{mark_all_read, notify, use_notifications, NotificationsProvider};

mod drafts;
pub use drafts::{use_drafts, DraftsProvider};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastProvider, Toasts};

mod navbar;
pub use navbar::Navbar;

mod product_card;
pub use product_card::ProductCard;

mod categories;
pub use categories::Categories;

mod footer;
pub use footer::Footer;

pub const COMPONENTS_CSS: Asset = asset!("/assets/components.css");
