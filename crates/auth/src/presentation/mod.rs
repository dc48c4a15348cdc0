//! Presentation Layer
//!
//! HTTP handlers, form DTOs, router, and HTML pages.

pub mod dto;
pub mod handlers;
pub mod pages;
pub mod router;

pub use handlers::AuthAppState;
pub use pages::Pages;
pub use router::{auth_router, auth_router_generic};
