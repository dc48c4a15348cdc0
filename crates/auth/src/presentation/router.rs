//! Auth Router

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::infra::postgres::PgStore;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::pages::Pages;

/// Create the router with the PostgreSQL store
pub fn auth_router(store: PgStore, config: AuthConfig) -> Router {
    auth_router_generic(store, config)
}

/// Create the router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        pages: Arc::new(Pages::new()),
    };

    Router::new()
        .route("/", get(handlers::index::<R>))
        .route(
            "/users/register",
            get(handlers::register::<R>).post(handlers::register_post::<R>),
        )
        .route(
            "/users/login",
            get(handlers::login::<R>).post(handlers::login_post::<R>),
        )
        .route("/users/logout", get(handlers::logout::<R>))
        .with_state(state)
}
