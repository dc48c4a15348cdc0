//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer. Both stores are opaque key-value-by-id: `save`,
//! `find_by_id`, `delete_by_id`, `delete_all`, with no cross-entity
//! transactional guarantees.

use crate::domain::entity::{session::Session, user::User};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    async fn save(&self, user: &User) -> AuthResult<()>;

    /// Find user by id
    async fn find_by_id(&self, id: &str) -> AuthResult<Option<User>>;

    /// Delete user by id (no-op when absent)
    async fn delete_by_id(&self, id: &str) -> AuthResult<()>;

    /// Delete all users (test teardown / admin path)
    async fn delete_all(&self) -> AuthResult<()>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Persist a new session
    async fn save(&self, session: &Session) -> AuthResult<()>;

    /// Find session by token
    async fn find_by_id(&self, id: &str) -> AuthResult<Option<Session>>;

    /// Delete session by token (no-op when absent)
    async fn delete_by_id(&self, id: &str) -> AuthResult<()>;

    /// Delete all sessions (test teardown / admin path)
    async fn delete_all(&self) -> AuthResult<()>;
}
