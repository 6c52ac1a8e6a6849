//! Identity projection types.
//!
//! The identity backend owns the real session; the client only observes
//! this simplified projection and reacts to change notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role recorded for newly registered accounts.
pub const DEFAULT_ROLE: &str = "member";

/// The signed-in identity as seen by the client.
///
/// Absence of a session is modeled as `Option<AuthSession>`; `None` means
/// signed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub uid: String,
    pub email: String,
    pub display_name: String,
}

impl AuthSession {
    /// Build a session projection, falling back to the email local-part
    /// when the provider supplied no display name.
    pub fn new(uid: String, email: String, display_name: Option<String>) -> Self {
        let display_name = display_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| display_name_from_email(&email));
        Self {
            uid,
            email,
            display_name,
        }
    }
}

/// Account record upserted to the identity backend on registration and
/// federated login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    pub role: String,
    pub joined: DateTime<Utc>,
}

impl UserProfile {
    pub fn for_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            name: display_name_from_email(email),
            role: DEFAULT_ROLE.to_string(),
            joined: Utc::now(),
        }
    }
}

/// The local-part of an email address, used as a default display name.
pub fn display_name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .unwrap_or(email)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_provider_name() {
        let session = AuthSession::new(
            "u1".to_string(),
            "reader1@example.com".to_string(),
            Some("Reader One".to_string()),
        );
        assert_eq!(session.display_name, "Reader One");
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        let session = AuthSession::new("u1".to_string(), "reader1@example.com".to_string(), None);
        assert_eq!(session.display_name, "reader1");

        let blank = AuthSession::new(
            "u2".to_string(),
            "quiet@example.com".to_string(),
            Some("  ".to_string()),
        );
        assert_eq!(blank.display_name, "quiet");
    }

    #[test]
    fn profile_derives_name_and_role() {
        let profile = UserProfile::for_email("bookworm@example.com");
        assert_eq!(profile.name, "bookworm");
        assert_eq!(profile.role, DEFAULT_ROLE);
    }
}
