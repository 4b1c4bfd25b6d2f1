//! # allauth-database
//!
//! Storage for users and sessions. The [`store`] module defines the two
//! traits the rest of the workspace depends on; [`repositories`] implements
//! them over PostgreSQL and [`memory`] implements them in-process.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::connect_pool;
pub use memory::MemoryStore;
pub use store::{SessionBackend, Stores, UserDirectory};
