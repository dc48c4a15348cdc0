//! Form DTOs
//!
//! Submitted form bodies. Login fields are `Option<String>` so the
//! handler can tell a field that was absent from the body apart from one
//! submitted empty, which render different validation messages.

use serde::Deserialize;

/// Registration form body
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

/// Login form body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub id: Option<String>,
    pub password: Option<String>,
}
