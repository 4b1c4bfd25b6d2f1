//! Resolves the session cookie to a [`RequestUser`] for the rest of the stack.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::warn;

use allauth_auth::RequestUser;

use crate::state::AppState;

/// Places the request user into the request extensions.
///
/// Requests without a cookie, or with a cookie naming an unknown or expired
/// session, continue as [`RequestUser::Anonymous`]. A failing lookup is
/// logged and the request continues anonymously as well.
pub async fn load_request_user(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let cookie_name = &state.config.session.cookie_name;
    let session_key = CookieJar::from_headers(request.headers())
        .get(cookie_name)
        .map(|c| c.value().to_string());

    let user = match session_key {
        Some(key) if !key.is_empty() => match state.session_store.load_user(&key).await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "Session lookup failed");
                RequestUser::Anonymous
            }
        },
        _ => RequestUser::Anonymous,
    };

    request.extensions_mut().insert(user);
    next.run(request).await
}

/// Attaches a removal cookie for the session cookie to `response`.
///
/// Nothing is added when the request carried no such cookie.
pub fn expire_session_cookie(
    request_headers: &HeaderMap,
    cookie_name: &str,
    response: Response,
) -> Response {
    let jar = CookieJar::from_headers(request_headers)
        .remove(Cookie::build(cookie_name.to_owned()).path("/"));
    (jar, response).into_response()
}
