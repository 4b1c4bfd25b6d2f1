//! # allauth-api
//!
//! HTTP layer built on Axum.
//!
//! Provides the request middleware (session loading, inactive-user logout,
//! access logging), the account endpoints guarded by the signup policy,
//! extractors, and error mapping.

pub mod app;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
