//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the web application:
//! - Session cookie construction and parsing
//! - Password hashing (Argon2id)

pub mod cookie;
pub mod password;
