//! Users deactivated after login lose their session on the next request.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_deactivated_user_is_logged_out() {
    let app = TestApp::new().await;
    app.create_test_user(1, "alice").await;
    let key = app.login(1).await;
    app.store.set_active(1, false).await.unwrap();

    let response = app.request("GET", "/health", Some(&key), &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.clears_session());
    assert_eq!(app.store.session_count().await, 0);

    let lines = app.access_log.take();
    assert_eq!(lines[0].1.message, "N GET /health");
    assert_eq!(lines[0].1.username, "-");
}

#[tokio::test]
async fn test_handler_sees_anonymous_after_logout() {
    let app = TestApp::new().await;
    app.create_test_user(1, "alice").await;
    let key = app.login(1).await;
    app.store.set_active(1, false).await.unwrap();

    app.request("GET", "/accounts/signup/", Some(&key), &[]).await;

    // The same cookie no longer resolves to a user.
    app.request("GET", "/health", Some(&key), &[]).await;
    let lines = app.access_log.take();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|(_, r)| r.username == "-"));
}

#[tokio::test]
async fn test_active_user_is_untouched() {
    let app = TestApp::new().await;
    app.create_test_user(1, "alice").await;
    let key = app.login(1).await;

    let response = app.request("GET", "/health", Some(&key), &[]).await;

    assert!(!response.clears_session());
    assert_eq!(app.store.session_count().await, 1);
    assert_eq!(app.access_log.take()[0].1.message, "A GET /health");
}

#[tokio::test]
async fn test_reactivated_user_must_log_in_again() {
    let app = TestApp::new().await;
    app.create_test_user(1, "alice").await;
    let key = app.login(1).await;

    app.store.set_active(1, false).await.unwrap();
    app.request("GET", "/health", Some(&key), &[]).await;
    app.store.set_active(1, true).await.unwrap();
    app.access_log.take();

    app.request("GET", "/health", Some(&key), &[]).await;
    assert_eq!(app.access_log.take()[0].1.message, "N GET /health");

    let fresh = app.login(1).await;
    app.request("GET", "/health", Some(&fresh), &[]).await;
    assert_eq!(app.access_log.take()[0].1.message, "A GET /health");
}

#[tokio::test]
async fn test_logout_endpoint_ends_session() {
    let app = TestApp::new().await;
    app.create_test_user(1, "alice").await;
    let key = app.login(1).await;

    let response = app
        .request("POST", "/accounts/logout/", Some(&key), &[])
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.clears_session());
    assert_eq!(app.store.session_count().await, 0);
}
