//! User Entity
//!
//! Identity plus credentials record. Created on registration, immutable
//! afterwards; there is no update path.

use chrono::{DateTime, Utc};

/// Maximum display name length (in characters)
pub const MAX_NAME_LENGTH: usize = 20;

/// Maximum plaintext password length (in characters)
pub const MAX_PASS_LENGTH: usize = 20;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// User-chosen identifier, unique across the store
    pub id: String,
    /// Display name
    pub name: String,
    /// Argon2id digest in PHC format, never plaintext
    pub password: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from an already-hashed password.
    pub fn new(id: impl Into<String>, name: impl Into<String>, password_hash: String) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            password: password_hash,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_keeps_digest_verbatim() {
        let user = User::new("alice", "Alice", "$argon2id$digest".to_string());

        assert_eq!(user.id, "alice");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.password, "$argon2id$digest");
    }
}
