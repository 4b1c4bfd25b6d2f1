//! # allauth-service
//!
//! Application services built on the user and session stores.
//!
//! Services follow constructor injection: every dependency is provided at
//! construction time via `Arc` references.

pub mod export;

pub use export::{ExportDestination, ExportService};
