//! Integration tests for notification listing and promotion.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_list_excludes_archived() {
    let app = TestApp::new().await;
    let user = app.create_test_user("ines@test.com", "password123", "receptor").await;
    let token = app.login("ines@test.com", "password123").await;

    let visible = app.create_lab_notification(user, "Dra. Souza").await;
    let archived = app.create_lab_notification(user, "Dr. Lima").await;
    sqlx::query("UPDATE notifications SET status = 'archived' WHERE id = $1")
        .bind(archived)
        .execute(&app.db_pool)
        .await
        .unwrap();

    let response = app.request("GET", "/api/notifications", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let list = response.body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"].as_str().unwrap(), visible.to_string());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_promote_creates_event_with_result_file() {
    let app = TestApp::new().await;
    let user = app.create_test_user("joao@test.com", "password123", "receptor").await;
    let token = app.login("joao@test.com", "password123").await;
    let notification = app.create_lab_notification(user, "Dra. Souza").await;

    let response = app
        .request(
            "POST",
            &format!("/api/notifications/{notification}/promote"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(
        response.body["title"].as_str().unwrap(),
        "Laudo: hemograma.pdf"
    );
    let files = response.body["attachments"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["slot"].as_str().unwrap(), "result");

    // The doctor was registered as a professional.
    let profs: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM professionals WHERE LOWER(name) = LOWER($1)")
            .bind("Dra. Souza")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(profs, 1);

    // The notification was archived.
    let status: String = sqlx::query_scalar("SELECT status::text FROM notifications WHERE id = $1")
        .bind(notification)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(status, "archived");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_promote_twice_conflicts() {
    let app = TestApp::new().await;
    let user = app.create_test_user("lia@test.com", "password123", "receptor").await;
    let token = app.login("lia@test.com", "password123").await;
    let notification = app.create_lab_notification(user, "Dra. Souza").await;

    let first = app
        .request(
            "POST",
            &format!("/api/notifications/{notification}/promote"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(
            "POST",
            &format!("/api/notifications/{notification}/promote"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_patch_notification_status() {
    let app = TestApp::new().await;
    let user = app.create_test_user("max@test.com", "password123", "receptor").await;
    let token = app.login("max@test.com", "password123").await;
    let notification = app.create_lab_notification(user, "Dr. Lima").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/notifications/{notification}"),
            Some(json!({ "status": "READ" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let status: String = sqlx::query_scalar("SELECT status::text FROM notifications WHERE id = $1")
        .bind(notification)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(status, "read");
}
