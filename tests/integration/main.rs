//! Integration tests driving the full router over the in-memory store.

mod access_log_test;
mod export_test;
mod helpers;
mod inactive_user_test;
mod signup_test;
