//! # Session store
//!
//! [`SessionStore`] is the single source of truth for the current user. Two
//! states, no pending third: **Anonymous** (`user` is `None`) and
//! **Authenticated** (`user` is `Some`). [`login`](SessionStore::login)
//! moves Anonymous → Authenticated, [`logout`](SessionStore::logout) moves
//! back. There is no credential verification; any syntactically accepted
//! email/password pair succeeds, subject to the email-domain rule the auth
//! views enforce via [`validate_email`] *before* calling `login`.
//!
//! The current user is persisted under [`SESSION_KEY`] so a reload stays
//! signed in; a malformed persisted record falls back to Anonymous.

use crate::models::{User, UserType};
use crate::storage::{KeyValueStorage, SESSION_KEY};

/// Institutional domain required for student accounts.
pub const STUDENT_EMAIL_DOMAIN: &str = "@kgkite.ac.in";

/// Institutional domain required for admin accounts.
pub const ADMIN_EMAIL_DOMAIN: &str = "@kgisl.ac.in";

/// Rejected sign-in/sign-up submission: email does not carry the domain
/// suffix the selected role requires.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} email must end with {}", .role.as_str(), .domain)]
pub struct EmailDomainError {
    pub role: UserType,
    pub domain: &'static str,
}

/// Check the email-domain business rule for the selected role. Enforced at
/// the form boundary, not inside [`SessionStore`].
pub fn validate_email(role: UserType, email: &str) -> Result<(), EmailDomainError> {
    let domain = match role {
        UserType::Student => STUDENT_EMAIL_DOMAIN,
        UserType::Admin => ADMIN_EMAIL_DOMAIN,
    };
    if email.ends_with(domain) {
        Ok(())
    } else {
        Err(EmailDomainError { role, domain })
    }
}

/// Current-user state, persisted across reloads.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    user: Option<User>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Restore the session from storage; malformed or absent ⇒ Anonymous.
    pub fn new(storage: S) -> Self {
        let user = match storage.get(SESSION_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!("discarding malformed persisted session: {err}");
                    None
                }
            },
            None => None,
        };
        Self { storage, user }
    }

    /// Set the current user and persist it.
    pub fn login(&mut self, user: User) {
        if let Ok(json) = serde_json::to_string(&user) {
            self.storage.set(SESSION_KEY, &json);
        }
        self.user = Some(user);
    }

    /// Clear the current user and the persisted record.
    pub fn logout(&mut self) {
        self.user = None;
        self.storage.remove(SESSION_KEY);
    }

    /// Derived from the user record; never tracked separately.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Role of the current user, if any.
    pub fn role(&self) -> Option<UserType> {
        self.user.as_ref().map(|u| u.user_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn student() -> User {
        User {
            name: "Priya".to_string(),
            email: "priya@kgkite.ac.in".to_string(),
            user_type: UserType::Student,
        }
    }

    #[test]
    fn login_then_logout() {
        let mut session = SessionStore::new(MemoryStorage::new());
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());

        session.login(student());
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().name, "Priya");
        assert_eq!(session.role(), Some(UserType::Student));

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn session_survives_reload() {
        let storage = MemoryStorage::new();

        let mut session = SessionStore::new(storage.clone());
        session.login(student());

        let reloaded = SessionStore::new(storage.clone());
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.user(), session.user());

        session.logout();
        let after_logout = SessionStore::new(storage);
        assert!(!after_logout.is_authenticated());
    }

    #[test]
    fn malformed_session_record_falls_back_to_anonymous() {
        let storage = MemoryStorage::new();
        storage.set(SESSION_KEY, "{not json");

        let session = SessionStore::new(storage);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn email_domain_rule() {
        assert!(validate_email(UserType::Student, "a@kgkite.ac.in").is_ok());
        assert!(validate_email(UserType::Admin, "a@kgisl.ac.in").is_ok());

        let err = validate_email(UserType::Student, "a@kgisl.ac.in").unwrap_err();
        assert_eq!(err.domain, STUDENT_EMAIL_DOMAIN);
        assert_eq!(
            err.to_string(),
            "student email must end with @kgkite.ac.in"
        );

        assert!(validate_email(UserType::Admin, "a@gmail.com").is_err());
    }
}
