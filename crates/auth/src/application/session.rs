//! Session Service
//!
//! Bridges persisted session records and the transport-layer cookie.
//! Holds no state of its own; every operation takes the request headers
//! explicitly instead of reading ambient request state.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::application::config::AuthConfig;
use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthResult;

/// Session service
pub struct SessionService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SessionService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Create a session for `user_id` and return it together with the
    /// `Set-Cookie` header value the response must carry.
    ///
    /// The token is a fresh UUIDv4; storage failures surface as errors
    /// rather than silently dropping the session.
    pub async fn create(&self, user_id: &str) -> AuthResult<(Session, String)> {
        let session = Session::new(user_id);
        self.session_repo.save(&session).await?;

        let cookie = self.config.cookie_config().build_set_cookie(&session.id);

        tracing::info!(
            user_id = %session.user_id,
            session_id = %session.id,
            "Session created"
        );

        Ok((session, cookie))
    }

    /// Destroy the session referenced by the request cookie and return the
    /// `Set-Cookie` header value that expires the cookie client-side.
    ///
    /// A missing cookie means "no session": the delete is a no-op and the
    /// clearing header is still returned.
    pub async fn destroy(&self, headers: &HeaderMap) -> AuthResult<String> {
        let session_id = self.cookie_value(headers);

        self.session_repo.delete_by_id(&session_id).await?;

        if !session_id.is_empty() {
            tracing::info!(session_id = %session_id, "Session destroyed");
        }

        Ok(self.config.cookie_config().build_clear_cookie())
    }

    /// Resolve the current user from the request cookie.
    ///
    /// The user is looked up by the session's stored `user_id` reference,
    /// never by the session token itself. `Ok(None)` covers both "no
    /// cookie" and "token not in the store".
    pub async fn current(&self, headers: &HeaderMap) -> AuthResult<Option<User>> {
        let session_id = self.cookie_value(headers);
        if session_id.is_empty() {
            return Ok(None);
        }

        let Some(session) = self.session_repo.find_by_id(&session_id).await? else {
            return Ok(None);
        };

        self.user_repo.find_by_id(&session.user_id).await
    }

    /// Session id from the request cookie, absent cookie reading as "".
    fn cookie_value(&self, headers: &HeaderMap) -> String {
        platform::cookie::extract_cookie(headers, &self.config.cookie_name).unwrap_or_default()
    }
}
