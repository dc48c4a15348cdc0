//! Auth Error Types
//!
//! Errors that escape a handler. Form validation failures are NOT errors:
//! they are re-rendered into the page the user submitted. What remains is
//! infrastructure failure (database, hashing, templates), which maps to a
//! 500 response.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Template rendering error
    #[error("Template rendering error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Password hashing error
    #[error("Password hashing error: {0}")]
    Hash(#[from] platform::password::PasswordHashError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Database(_)
            | AuthError::Render(_)
            | AuthError::Hash(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Render(e) => {
                tracing::error!(error = %e, "Template rendering failed");
            }
            AuthError::Hash(e) => {
                tracing::error!(error = %e, "Password hashing failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();

        (
            self.status_code(),
            Html("<h1>Internal Server Error</h1>".to_string()),
        )
            .into_response()
    }
}
