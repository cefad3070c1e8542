//! # Route guard
//!
//! A pure decision function over `(authenticated, role, admin_only,
//! current_path)`. The rules, in precedence order:
//!
//! 1. Not authenticated ⇒ redirect to sign-in.
//! 2. Admin on a page that is neither admin-only nor already the admin
//!    dashboard ⇒ redirect to the dashboard. As written, this means an admin
//!    can never view ordinary protected pages like `/favorites`; that is the
//!    observed behavior and is pinned by a test rather than second-guessed.
//! 3. Admin-only page, non-admin user ⇒ redirect home.
//! 4. Otherwise render.

use crate::models::UserType;

/// Path of the admin dashboard, the one page rule 2 exempts.
pub const ADMIN_PATH: &str = "/admin";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectToAuth,
    RedirectToAdmin,
    RedirectToHome,
}

pub fn evaluate(
    authenticated: bool,
    role: Option<UserType>,
    admin_only: bool,
    current_path: &str,
) -> RouteDecision {
    if !authenticated {
        return RouteDecision::RedirectToAuth;
    }
    let is_admin = role == Some(UserType::Admin);
    if is_admin && !admin_only && current_path != ADMIN_PATH {
        return RouteDecision::RedirectToAdmin;
    }
    if admin_only && !is_admin {
        return RouteDecision::RedirectToHome;
    }
    RouteDecision::Render
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_goes_to_sign_in() {
        assert_eq!(
            evaluate(false, None, false, "/profile"),
            RouteDecision::RedirectToAuth
        );
        // Even for the admin dashboard.
        assert_eq!(
            evaluate(false, None, true, ADMIN_PATH),
            RouteDecision::RedirectToAuth
        );
    }

    #[test]
    fn admin_is_steered_off_ordinary_pages() {
        assert_eq!(
            evaluate(true, Some(UserType::Admin), false, "/profile"),
            RouteDecision::RedirectToAdmin
        );
        assert_eq!(
            evaluate(true, Some(UserType::Admin), false, "/favorites"),
            RouteDecision::RedirectToAdmin
        );
    }

    #[test]
    fn admin_renders_admin_only_pages() {
        assert_eq!(
            evaluate(true, Some(UserType::Admin), true, ADMIN_PATH),
            RouteDecision::Render
        );
    }

    #[test]
    fn student_is_kept_out_of_admin_pages() {
        assert_eq!(
            evaluate(true, Some(UserType::Student), true, ADMIN_PATH),
            RouteDecision::RedirectToHome
        );
    }

    #[test]
    fn student_renders_ordinary_pages() {
        assert_eq!(
            evaluate(true, Some(UserType::Student), false, "/favorites"),
            RouteDecision::Render
        );
        assert_eq!(
            evaluate(true, Some(UserType::Student), false, "/profile"),
            RouteDecision::Render
        );
    }

    #[test]
    fn rule_order_puts_authentication_first() {
        // An unauthenticated request never reaches the role rules.
        for admin_only in [false, true] {
            for path in ["/", ADMIN_PATH, "/sell"] {
                assert_eq!(
                    evaluate(false, Some(UserType::Admin), admin_only, path),
                    RouteDecision::RedirectToAuth
                );
            }
        }
    }
}
