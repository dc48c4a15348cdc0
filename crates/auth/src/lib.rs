//! Auth (Authentication) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Session service and configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, forms, router, HTML pages
//!
//! ## Features
//! - User registration with server-rendered forms
//! - Login/logout with server-side sessions
//! - Session token propagated via the `X-SESS-ID` cookie
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Session tokens are cryptographically random (UUIDv4)
//! - Unknown id and wrong password answer identically

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::{AuthConfig, SESSION_COOKIE_NAME};
pub use application::session::SessionService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgStore;
pub use presentation::router::auth_router;
