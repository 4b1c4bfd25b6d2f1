//! HTTP handlers.

pub mod account;
pub mod health;

use allauth_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    AppError::not_found("No such route").into()
}
