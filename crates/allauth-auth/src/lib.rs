//! # allauth-auth
//!
//! Authentication glue between the HTTP layer and the user store.
//!
//! ## Modules
//!
//! - `adapter`: the account policy deciding whether self-signup is open
//! - `session`: resolving a session cookie to a [`RequestUser`] and the
//!   logout primitive

pub mod adapter;
pub mod session;

pub use adapter::{AccountPolicy, DefaultAccountPolicy, NoNewUsersAccountPolicy};
pub use session::{RequestUser, SessionStore};
