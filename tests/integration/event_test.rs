//! Integration tests for event scheduling and file-slot handling.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn event_body(title: &str, start: &str, end: &str, professional_id: uuid::Uuid) -> serde_json::Value {
    json!({
        "title": title,
        "date": "2025-03-10",
        "startTime": start,
        "endTime": end,
        "type": "consultation",
        "professionalId": professional_id,
    })
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_create_event() {
    let app = TestApp::new().await;
    let user = app.create_test_user("carla@test.com", "password123", "receptor").await;
    let prof = app.create_test_professional(user, "Dr. Lima").await;
    let token = app.login("carla@test.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/events",
            Some(event_body("Consulta", "09:00", "09:30", prof)),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["title"].as_str().unwrap(), "Consulta");
    assert!(response.body.get("id").is_some());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_overlapping_create_is_rejected() {
    let app = TestApp::new().await;
    let user = app.create_test_user("davi@test.com", "password123", "receptor").await;
    let prof = app.create_test_professional(user, "Dr. Lima").await;
    let token = app.login("davi@test.com", "password123").await;

    let first = app
        .request(
            "POST",
            "/api/events",
            Some(event_body("Consulta", "09:00", "09:30", prof)),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(
            "POST",
            "/api/events",
            Some(event_body("Retorno", "09:15", "09:45", prof)),
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);

    // No second row was written.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_touching_boundary_counts_as_overlap() {
    let app = TestApp::new().await;
    let user = app.create_test_user("edu@test.com", "password123", "receptor").await;
    let prof = app.create_test_professional(user, "Dra. Souza").await;
    let token = app.login("edu@test.com", "password123").await;

    let first = app
        .request(
            "POST",
            "/api/events",
            Some(event_body("Consulta", "09:00", "09:30", prof)),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let touching = app
        .request(
            "POST",
            "/api/events",
            Some(event_body("Retorno", "09:30", "10:00", prof)),
            Some(&token),
        )
        .await;
    assert_eq!(touching.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_update_result_conflict_and_overwrite() {
    let app = TestApp::new().await;
    let user = app.create_test_user("fabi@test.com", "password123", "receptor").await;
    let prof = app.create_test_professional(user, "Dr. Lima").await;
    let token = app.login("fabi@test.com", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/events",
            Some(event_body("Exame", "09:00", "09:30", prof)),
            Some(&token),
        )
        .await;
    let event_id = created.body["id"].as_str().unwrap().to_string();

    let with_result = |name: &str| {
        let mut body = event_body("Exame", "09:00", "09:30", prof);
        body["id"] = json!(event_id);
        body["files"] = json!([{
            "slot": "result",
            "name": name,
            "url": format!("/uploads/{event_id}/result-{name}"),
        }]);
        body
    };

    // First result attaches cleanly.
    let first = app
        .request("PUT", "/api/events", Some(with_result("laudo-v1.pdf")), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK, "{:?}", first.body);

    // Replacing it without confirmation returns a prompt, not an update.
    let conflict = app
        .request("PUT", "/api/events", Some(with_result("laudo-v2.pdf")), Some(&token))
        .await;
    assert_eq!(conflict.status, StatusCode::CONFLICT);
    assert!(
        conflict.body["message"]
            .as_str()
            .unwrap()
            .contains("sobrescrever")
    );

    // Same call with the overwrite header goes through.
    let overwritten = app
        .request_with_headers(
            "PUT",
            "/api/events",
            Some(with_result("laudo-v2.pdf")),
            Some(&token),
            &[("x-overwrite-result", "true")],
        )
        .await;
    assert_eq!(overwritten.status, StatusCode::OK, "{:?}", overwritten.body);
    let files = overwritten.body["attachments"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["name"].as_str().unwrap(), "laudo-v2.pdf");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_update_resending_stored_result_needs_no_confirmation() {
    let app = TestApp::new().await;
    let user = app.create_test_user("heitor@test.com", "password123", "receptor").await;
    let prof = app.create_test_professional(user, "Dr. Lima").await;
    let token = app.login("heitor@test.com", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/events",
            Some(event_body("Exame", "09:00", "09:30", prof)),
            Some(&token),
        )
        .await;
    let event_id = created.body["id"].as_str().unwrap().to_string();

    let mut attach = event_body("Exame", "09:00", "09:30", prof);
    attach["id"] = json!(event_id);
    attach["files"] = json!([{
        "slot": "result",
        "name": "laudo.pdf",
        "url": format!("/uploads/{event_id}/result-laudo.pdf"),
    }]);
    let first = app.request("PUT", "/api/events", Some(attach), Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK, "{:?}", first.body);

    // An ordinary edit sends the full current file list back; the
    // unchanged result must not trip the overwrite prompt.
    let mut edit = event_body("Exame remarcado", "09:00", "09:30", prof);
    edit["id"] = json!(event_id);
    edit["files"] = json!([
        {
            "slot": "result",
            "name": "laudo.pdf",
            "url": format!("/uploads/{event_id}/result-laudo.pdf"),
        },
        {
            "slot": "invoice",
            "name": "nf.pdf",
            "url": format!("/uploads/{event_id}/invoice-nf.pdf"),
        },
    ]);
    let edited = app.request("PUT", "/api/events", Some(edit), Some(&token)).await;
    assert_eq!(edited.status, StatusCode::OK, "{:?}", edited.body);
    assert_eq!(edited.body["title"].as_str().unwrap(), "Exame remarcado");
    assert_eq!(edited.body["attachments"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_create_rejects_malformed_attachment() {
    let app = TestApp::new().await;
    let user = app.create_test_user("iara@test.com", "password123", "receptor").await;
    let prof = app.create_test_professional(user, "Dr. Lima").await;
    let token = app.login("iara@test.com", "password123").await;

    let mut body = event_body("Exame", "09:00", "09:30", prof);
    body["files"] = json!([{ "slot": "result", "name": "", "url": "" }]);

    let response = app.request("POST", "/api/events", Some(body), Some(&token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_create_keeps_one_attachment_per_slot() {
    let app = TestApp::new().await;
    let user = app.create_test_user("joel@test.com", "password123", "receptor").await;
    let prof = app.create_test_professional(user, "Dr. Lima").await;
    let token = app.login("joel@test.com", "password123").await;

    let mut body = event_body("Exame", "09:00", "09:30", prof);
    body["files"] = json!([
        { "slot": "result", "name": "laudo-v1.pdf", "url": "/uploads/x/result-laudo-v1.pdf" },
        { "slot": "result", "name": "laudo-v2.pdf", "url": "/uploads/x/result-laudo-v2.pdf" },
    ]);

    let response = app.request("POST", "/api/events", Some(body), Some(&token)).await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let files = response.body["attachments"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["name"].as_str().unwrap(), "laudo-v2.pdf");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL instance"]
async fn test_delete_survives_missing_files() {
    let app = TestApp::new().await;
    let user = app.create_test_user("gil@test.com", "password123", "receptor").await;
    let prof = app.create_test_professional(user, "Dr. Lima").await;
    let token = app.login("gil@test.com", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/events",
            Some(event_body("Consulta", "09:00", "09:30", prof)),
            Some(&token),
        )
        .await;
    let event_id = created.body["id"].as_str().unwrap().to_string();

    // Point an attachment at a file that was never stored.
    sqlx::query(
        "UPDATE events SET attachments = $2 WHERE id = $1::uuid",
    )
    .bind(&event_id)
    .bind(json!([{
        "slot": "result",
        "name": "fantasma.pdf",
        "url": format!("/uploads/{event_id}/result-fantasma.pdf"),
    }]))
    .execute(&app.db_pool)
    .await
    .unwrap();

    let response = app
        .request(
            "DELETE",
            "/api/events",
            Some(json!({ "id": event_id, "deleteFiles": true })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
