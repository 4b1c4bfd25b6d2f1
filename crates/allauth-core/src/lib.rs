//! # allauth-core
//!
//! Core crate for the EOxServer allauth integration. Contains the
//! configuration schemas and the unified error system shared by every
//! other crate in the workspace.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
