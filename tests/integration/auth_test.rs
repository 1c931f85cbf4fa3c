//! Integration tests for the authentication flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.create_test_user("ana@test.com", "password123", "receptor")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "ana@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("token").is_some());
    assert_eq!(
        response.body["user"]["role"].as_str().unwrap(),
        "receptor"
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;
    app.create_test_user("bruno@test.com", "password123", "receptor")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "bruno@test.com",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@test.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_protected_route_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/events", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
