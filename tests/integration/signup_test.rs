//! Signup gate over HTTP.

use http::StatusCode;

use allauth_auth::{AccountPolicy, NoNewUsersAccountPolicy};
use allauth_core::config::AccountAdapter;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_signup_closed_for_anonymous() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/accounts/signup/", None, &[]).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "SIGNUP_CLOSED");
}

#[tokio::test]
async fn test_signup_closed_for_authenticated_user() {
    let app = TestApp::new().await;
    app.create_test_user(1, "alice").await;
    let key = app.login(1).await;

    let response = app
        .request("POST", "/accounts/signup/", Some(&key), &[])
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_default_adapter_leaves_signup_to_provider() {
    let app = TestApp::with_adapter(AccountAdapter::Default).await;

    let response = app.request("GET", "/accounts/signup/", None, &[]).await;

    assert_eq!(response.status, StatusCode::NOT_IMPLEMENTED);
}

#[test]
fn test_no_new_users_policy_never_opens() {
    let policy = NoNewUsersAccountPolicy;
    assert!(!policy.is_open_for_signup(None));

    for uri in ["/", "/accounts/signup/?next=/admin", "http://other.host/x"] {
        let (parts, _) = http::Request::builder()
            .uri(uri)
            .header("x-forwarded-for", "10.0.0.1")
            .body(())
            .unwrap()
            .into_parts();
        assert!(!policy.is_open_for_signup(Some(&parts)));
    }
}
