//! Domain Layer
//!
//! Entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{session::Session, user::User};
pub use repository::{SessionRepository, UserRepository};
