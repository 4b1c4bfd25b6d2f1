//! Request middleware, outermost first: session loading, inactive-user
//! logout, access logging.

pub mod access_log;
pub mod inactive_user;
pub mod session;
