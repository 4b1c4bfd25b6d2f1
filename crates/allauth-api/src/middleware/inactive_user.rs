//! Ends the session of users deactivated after they logged in.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use allauth_auth::RequestUser;

use super::session::expire_session_cookie;
use crate::error::ApiError;
use crate::state::AppState;

/// Logs out an authenticated user whose account is no longer active.
///
/// The session is deleted, the request continues as anonymous and the
/// response expires the session cookie. Active and anonymous requests pass
/// through unchanged.
pub async fn logout_inactive_user(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<RequestUser>()
        .cloned()
        .unwrap_or_default();

    if !user.is_deactivated() {
        return Ok(next.run(request).await);
    }

    if let Some(key) = user.session_key() {
        state.session_store.logout(key).await?;
    }
    info!(
        username = user.username().unwrap_or_default(),
        "Logged out deactivated user"
    );

    let headers = request.headers().clone();
    request.extensions_mut().insert(RequestUser::Anonymous);
    let response = next.run(request).await;

    Ok(expire_session_cookie(
        &headers,
        &state.config.session.cookie_name,
        response,
    ))
}
