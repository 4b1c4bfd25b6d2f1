//! Route definitions.
//!
//! Middleware order, outermost first: session loading, inactive-user
//! logout, access logging. The access logger therefore sees the request
//! user as it reaches the handler.

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};

use allauth_core::config::AccessLevel;

use crate::handlers;
use crate::middleware::access_log::log_access;
use crate::middleware::inactive_user::logout_inactive_user;
use crate::middleware::session::load_request_user;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let access_logger = state.access_logger.clone();
    let health_logger = access_logger.with_levels(AccessLevel::Debug, AccessLevel::Debug);

    let account_routes = account_routes()
        .fallback(handlers::not_found)
        .layer(from_fn_with_state(access_logger, log_access));

    let health_routes = health_routes().layer(from_fn_with_state(health_logger, log_access));

    Router::new()
        .merge(health_routes)
        .merge(account_routes)
        .layer(from_fn_with_state(state.clone(), logout_inactive_user))
        .layer(from_fn_with_state(state.clone(), load_request_user))
        .with_state(state)
}

/// Signup gate and logout
fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/accounts/signup/",
            get(handlers::account::signup).post(handlers::account::signup),
        )
        .route("/accounts/logout/", post(handlers::account::logout))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
