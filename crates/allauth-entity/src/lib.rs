//! # allauth-entity
//!
//! Domain entity models. Every struct in this crate represents a database
//! table row or an aggregate read from several rows. Row structs derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize` and `sqlx::FromRow`.

pub mod session;
pub mod user;

pub use session::Session;
pub use user::{EmailAddress, SocialAccount, User, UserProfile, UserRecord};
