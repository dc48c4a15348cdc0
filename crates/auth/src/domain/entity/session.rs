//! Session Entity
//!
//! Server-persisted token record linking an opaque id to a user id,
//! mirrored client-side by the session cookie. Lifecycle is
//! `nonexistent -> active (login) -> nonexistent (logout)`; there is no
//! server-side expiry transition, only the cookie's own lifetime.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque unique token (UUIDv4), also the cookie value
    pub id: String,
    /// Reference to `User.id`; lookup-only, not a foreign key
    pub user_id: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session bound to `user_id`.
    ///
    /// The token must be unguessable, so it comes from a cryptographically
    /// random UUIDv4 rather than anything time-based or sequential.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_unique_per_session() {
        let a = Session::new("alice");
        let b = Session::new("alice");

        assert_ne!(a.id, b.id);
        assert_eq!(a.user_id, b.user_id);
    }

    #[test]
    fn test_token_is_not_derived_from_user_id() {
        let session = Session::new("alice");

        assert_ne!(session.id, session.user_id);
        // UUIDv4 string shape: 36 chars with hyphens
        assert_eq!(session.id.len(), 36);
    }
}
