//! Account adapter policies.

pub mod policy;

pub use policy::{
    AccountPolicy, DefaultAccountPolicy, NoNewUsersAccountPolicy, build_account_policy,
};
