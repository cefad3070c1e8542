//! Access-control wrapper for views that require a signed-in user.

use dioxus::prelude::*;
use store::guard::{self, RouteDecision};

use crate::Route;

/// Gate rendering of a protected view on the session state.
///
/// The decision itself is [`store::guard::evaluate`]; this component only
/// performs the redirect it asks for. Children render exactly when the user
/// is authenticated, so a redirecting admin never sees a flash of the
/// ordinary page content.
#[component]
pub fn Protected(#[props(default = false)] admin_only: bool, children: Element) -> Element {
    let session = ui::use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let (authenticated, role) = {
        let session = session.read();
        (session.is_authenticated(), session.role())
    };

    let path = route.to_string();
    match guard::evaluate(authenticated, role, admin_only, &path) {
        RouteDecision::RedirectToAuth => {
            tracing::debug!("unauthenticated visit to {path}, redirecting to sign-in");
            nav.replace(Route::Auth {});
        }
        RouteDecision::RedirectToAdmin => {
            tracing::debug!("admin visit to {path}, redirecting to dashboard");
            nav.replace(Route::AdminDashboard {});
        }
        RouteDecision::RedirectToHome => {
            tracing::debug!("non-admin visit to {path}, redirecting home");
            nav.replace(Route::Home {});
        }
        RouteDecision::Render => {}
    }

    if authenticated {
        rsx! {
            {children}
        }
    } else {
        rsx! {}
    }
}
