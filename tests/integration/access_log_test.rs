//! Access log lines as seen through the full middleware stack.

use http::StatusCode;

use allauth_core::config::AccessLevel;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_authenticated_request_logs_a_then_r() {
    let app = TestApp::new().await;
    app.create_test_user(1, "alice").await;
    let key = app.login(1).await;

    app.request(
        "GET",
        "/accounts/signup/",
        Some(&key),
        &[("x-forwarded-for", " 198.51.100.4 , 10.0.0.1")],
    )
    .await;

    let lines = app.access_log.take();
    assert_eq!(lines.len(), 2);

    let (level, request_line) = &lines[0];
    assert_eq!(*level, AccessLevel::Info);
    assert_eq!(request_line.message, "A GET /accounts/signup/");
    assert_eq!(request_line.username, "alice");
    assert_eq!(request_line.remote_addr, "198.51.100.4");

    let (level, response_line) = &lines[1];
    assert_eq!(*level, AccessLevel::Warn);
    assert_eq!(response_line.message, "R GET /accounts/signup/ 403 Forbidden ");
    assert_eq!(response_line.username, "alice");
}

#[tokio::test]
async fn test_anonymous_request_uses_unauthenticated_level() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/accounts/logout/", None, &[]).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let lines = app.access_log.take();
    assert_eq!(lines[0].0, AccessLevel::Debug);
    assert_eq!(lines[0].1.message, "N POST /accounts/logout/");
    assert_eq!(lines[0].1.username, "-");
    assert_eq!(lines[0].1.remote_addr, "-");
    assert_eq!(lines[1].0, AccessLevel::Debug);
    assert_eq!(lines[1].1.message, "R POST /accounts/logout/ 204 No Content ");
}

#[tokio::test]
async fn test_query_string_is_not_logged() {
    let app = TestApp::new().await;

    app.request("GET", "/health?verbose=1", None, &[]).await;

    let lines = app.access_log.take();
    assert_eq!(lines[0].1.message, "N GET /health");
}

#[tokio::test]
async fn test_unknown_route_logs_warn() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/ows", None, &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let lines = app.access_log.take();
    assert_eq!(lines[1].0, AccessLevel::Warn);
    assert_eq!(lines[1].1.message, "R GET /ows 404 Not Found ");
}

#[tokio::test]
async fn test_blank_forwarded_for_logs_dash() {
    let app = TestApp::new().await;

    app.request("GET", "/health", None, &[("x-forwarded-for", " , 10.0.0.1")])
        .await;

    let lines = app.access_log.take();
    assert_eq!(lines[0].1.remote_addr, "-");
    assert_eq!(lines[1].1.remote_addr, "-");
}

#[tokio::test]
async fn test_logout_response_uses_unauthenticated_level() {
    let app = TestApp::new().await;
    app.create_test_user(1, "alice").await;
    let key = app.login(1).await;

    let response = app.request("POST", "/accounts/logout/", Some(&key), &[]).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let lines = app.access_log.take();
    assert_eq!(lines[0].0, AccessLevel::Info);
    assert_eq!(lines[0].1.message, "A POST /accounts/logout/");
    assert_eq!(lines[1].0, AccessLevel::Debug);
    assert_eq!(lines[1].1.message, "R POST /accounts/logout/ 204 No Content ");
    assert_eq!(lines[1].1.username, "alice");
}
