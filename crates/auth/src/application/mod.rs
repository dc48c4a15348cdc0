//! Application Layer
//!
//! The session service and its configuration.

pub mod config;
pub mod session;

// Re-exports
pub use config::AuthConfig;
pub use session::SessionService;
