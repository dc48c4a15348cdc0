//! Password Hashing and Verification
//!
//! Argon2id hashing with per-password random salts. Plaintext passwords
//! are NFKC-normalized before hashing so visually identical input always
//! verifies, and are zeroized on drop.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`, and `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlainPassword(String);

impl PlainPassword {
    /// Wrap a raw password, applying Unicode NFKC normalization.
    pub fn new(raw: &str) -> Self {
        Self(raw.nfkc().collect())
    }

    /// Number of Unicode code points (not bytes).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with Argon2id, producing a PHC-format digest string.
    pub fn hash(&self) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        let digest = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(digest.to_string())
    }

    /// Verify against a stored PHC-format digest.
    ///
    /// A mismatch is `Ok(false)`; a digest that cannot be parsed is an
    /// error.
    pub fn verify(&self, digest: &str) -> Result<bool, PasswordHashError> {
        let parsed =
            PasswordHash::new(digest).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Argon2::default()
            .verify_password(self.as_bytes(), &parsed)
            .is_ok())
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlainPassword").field(&"[REDACTED]").finish()
    }
}
