//! `CurrentUser` extractor: the user resolved by the session middleware.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use allauth_auth::RequestUser;

/// The request user placed into the extensions by
/// [`load_request_user`](crate::middleware::session::load_request_user).
/// Routes outside that middleware always see an anonymous user.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub RequestUser);

impl std::ops::Deref for CurrentUser {
    type Target = RequestUser;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(
            parts
                .extensions
                .get::<RequestUser>()
                .cloned()
                .unwrap_or_default(),
        ))
    }
}
