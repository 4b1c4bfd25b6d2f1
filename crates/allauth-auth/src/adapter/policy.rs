//! Signup policy consulted by the account endpoints.

use std::sync::Arc;

use http::request::Parts;

use allauth_core::config::{AccountAdapter, AccountConfig};

/// Decides whether visitors may create accounts themselves.
pub trait AccountPolicy: Send + Sync + 'static {
    /// Whether the site is open for signups. `request` is `None` when the
    /// question is asked outside of a request (e.g. when rendering links).
    fn is_open_for_signup(&self, request: Option<&Parts>) -> bool;
}

/// Refuses every signup. Accounts are provisioned by administrators.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNewUsersAccountPolicy;

impl AccountPolicy for NoNewUsersAccountPolicy {
    fn is_open_for_signup(&self, _request: Option<&Parts>) -> bool {
        false
    }
}

/// Stock behaviour of the account add-on: signup is open.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAccountPolicy;

impl AccountPolicy for DefaultAccountPolicy {
    fn is_open_for_signup(&self, _request: Option<&Parts>) -> bool {
        true
    }
}

/// Builds the policy selected by `account.adapter`.
pub fn build_account_policy(config: &AccountConfig) -> Arc<dyn AccountPolicy> {
    match config.adapter {
        AccountAdapter::NoNewUsers => Arc::new(NoNewUsersAccountPolicy),
        AccountAdapter::Default => Arc::new(DefaultAccountPolicy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{Method, Request};

    fn parts(method: Method, uri: &str) -> Parts {
        let (parts, _) = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-forwarded-for", "10.0.0.1")
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[test]
    fn test_no_new_users_refuses_without_request() {
        assert!(!NoNewUsersAccountPolicy.is_open_for_signup(None));
    }

    #[test]
    fn test_no_new_users_refuses_every_request() {
        let policy = NoNewUsersAccountPolicy;
        for (method, uri) in [
            (Method::GET, "/accounts/signup/"),
            (Method::POST, "/accounts/signup/?next=/ows"),
            (Method::PUT, "/"),
        ] {
            assert!(!policy.is_open_for_signup(Some(&parts(method, uri))));
        }
    }

    #[test]
    fn test_build_from_config() {
        let closed = build_account_policy(&AccountConfig::default());
        assert!(!closed.is_open_for_signup(None));

        let open = build_account_policy(&AccountConfig {
            adapter: AccountAdapter::Default,
        });
        assert!(open.is_open_for_signup(None));
    }
}
