//! Session resolution and termination.

pub mod store;
pub mod user;

pub use store::SessionStore;
pub use user::RequestUser;
