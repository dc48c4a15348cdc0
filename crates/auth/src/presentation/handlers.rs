//! HTTP Handlers
//!
//! The registration/login/logout flows. Validation failures never leave
//! this layer as errors: they re-render the submitted form with a message.
//! Unknown user and wrong password collapse into one generic message so
//! responses do not leak which accounts exist.

use axum::extract::{Form, State};
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::password::PlainPassword;

use crate::application::config::AuthConfig;
use crate::application::session::SessionService;
use crate::domain::entity::user::{self, User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{LoginForm, RegisterForm};
use crate::presentation::pages::Pages;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub pages: Arc<Pages>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    fn session_service(&self) -> SessionService<R, R> {
        SessionService::new(self.repo.clone(), self.repo.clone(), self.config.clone())
    }
}

// ============================================================================
// Index
// ============================================================================

/// GET /
pub async fn index<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Html<String>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let current = state.session_service().current(&headers).await?;

    Ok(Html(state.pages.index(current.as_ref().map(|u| u.name.as_str()))?))
}

// ============================================================================
// Register
// ============================================================================

/// GET /users/register
pub async fn register<R>(State(state): State<AuthAppState<R>>) -> AuthResult<Html<String>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    Ok(Html(state.pages.register(None, "", "")?))
}

/// POST /users/register
pub async fn register_post<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<RegisterForm>,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(message) = validate_registration(&form) {
        let page = state.pages.register(Some(&message), &form.id, &form.name)?;
        return Ok(Html(page).into_response());
    }

    if UserRepository::find_by_id(state.repo.as_ref(), &form.id)
        .await?
        .is_some()
    {
        let page = state
            .pages
            .register(Some("User Id already exists"), &form.id, &form.name)?;
        return Ok(Html(page).into_response());
    }

    let digest = PlainPassword::new(&form.password).hash()?;
    let new_user = User::new(&form.id, &form.name, digest);
    UserRepository::save(state.repo.as_ref(), &new_user).await?;

    tracing::info!(user_id = %new_user.id, "User registered");

    Ok(Redirect::to("/users/login").into_response())
}

/// Field checks for the registration form, front to back; the first
/// failure wins.
fn validate_registration(form: &RegisterForm) -> Option<String> {
    if form.id.is_empty() || form.name.is_empty() || form.password.is_empty() {
        return Some("Id, Name, Password Cannot Empty".to_string());
    }

    if form.name.chars().count() > user::MAX_NAME_LENGTH {
        return Some(format!(
            "Name Cannot Exceed More Than {} Characters",
            user::MAX_NAME_LENGTH
        ));
    }

    if PlainPassword::new(&form.password).char_count() > user::MAX_PASS_LENGTH {
        return Some(format!(
            "Password Cannot Exceed More Than {} Characters",
            user::MAX_PASS_LENGTH
        ));
    }

    None
}

// ============================================================================
// Login
// ============================================================================

/// GET /users/login
pub async fn login<R>(State(state): State<AuthAppState<R>>) -> AuthResult<Html<String>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    Ok(Html(state.pages.login(None, "")?))
}

/// POST /users/login
pub async fn login_post<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let (Some(id), Some(password)) = (form.id, form.password) else {
        let page = state.pages.login(Some("Id, Password Cannot Null"), "")?;
        return Ok(Html(page).into_response());
    };

    if id.is_empty() || password.is_empty() {
        let page = state.pages.login(Some("Id, Password Cannot Empty"), &id)?;
        return Ok(Html(page).into_response());
    }

    let user = UserRepository::find_by_id(state.repo.as_ref(), &id).await?;

    let password_valid = match &user {
        Some(user) => PlainPassword::new(&password).verify(&user.password)?,
        None => false,
    };

    // Unknown id and wrong password must be indistinguishable.
    if !password_valid {
        tracing::warn!("Invalid login attempt");
        let page = state.pages.login(Some("Id or Password is wrong"), &id)?;
        return Ok(Html(page).into_response());
    }

    let (_session, cookie) = state.session_service().create(&id).await?;

    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response())
}

// ============================================================================
// Logout
// ============================================================================

/// GET /users/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.session_service().destroy(&headers).await?;

    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response())
}
