use dioxus::prelude::*;

use ui::{DraftsProvider, FavoritesProvider, NotificationsProvider, SessionProvider, ToastProvider};
use views::{
    AdminDashboard, Auth, Chat, Favorites, ForgotPassword, Home, NotFound, Notifications,
    ProductDetail, Profile, SellItem, SignUp,
};

mod data;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/product/:id")]
    ProductDetail { id: String },
    #[route("/profile")]
    Profile {},
    #[route("/sell")]
    SellItem {},
    #[route("/favorites")]
    Favorites {},
    #[route("/notifications")]
    Notifications {},
    #[route("/chat/:id")]
    Chat { id: String },
    #[route("/auth")]
    Auth {},
    #[route("/signup")]
    SignUp {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::COMPONENTS_CSS }

        SessionProvider {
            FavoritesProvider {
                NotificationsProvider {
                    DraftsProvider {
                        ToastProvider {
                            Router::<Route> {}
                        }
                    }
                }
            }
        }
    }
}
