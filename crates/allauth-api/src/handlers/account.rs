//! Account endpoints: the signup gate and logout.

use axum::Extension;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use allauth_auth::RequestUser;
use allauth_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// `GET|POST /accounts/signup/`
///
/// Rejected with `SIGNUP_CLOSED` whenever the account policy says signup is
/// closed. Creating accounts is left to the upstream provider flow.
pub async fn signup(State(state): State<AppState>, request: Request) -> Result<Response, ApiError> {
    let (parts, _body) = request.into_parts();
    if !state.account_policy.is_open_for_signup(Some(&parts)) {
        tracing::debug!(path = %parts.uri.path(), "Signup attempt refused");
        return Err(AppError::signup_closed("Sign up is currently closed").into());
    }

    Err(AppError::not_implemented("Account creation is handled by the identity provider").into())
}

/// `POST /accounts/logout/`
///
/// Ends the current session and expires the cookie. Anonymous callers get
/// the same answer. The response carries the anonymous request user so the
/// access log reports the state after logout.
pub async fn logout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(key) = user.session_key() {
        state.session_store.logout(key).await?;
    }

    let jar = jar.remove(Cookie::build(state.config.session.cookie_name.clone()).path("/"));
    Ok((jar, Extension(RequestUser::Anonymous), StatusCode::NO_CONTENT))
}
