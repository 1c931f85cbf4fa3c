//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use omni_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

impl TestApp {
    /// Create a new test application wired against the test database.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db = omni_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        let db_pool = db.into_pool();

        omni_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = omni_api::build_state(config, db_pool.clone())
            .await
            .expect("Failed to build app state");
        let router = omni_api::build_router(state);

        Self { router, db_pool }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = ["notifications", "reports", "events", "professionals", "users"];
        for table in &tables {
            let query = format!("DELETE FROM {table}");
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, email: &str, password: &str, role: &str) -> Uuid {
        let hasher = omni_auth::PasswordHasher::new();
        let hash = hasher.hash_password(password).expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO users (id, email, password_hash, name, role) \
             VALUES ($1, LOWER($2), $3, $4, $5::user_role)",
        )
        .bind(id)
        .bind(email)
        .bind(&hash)
        .bind(email)
        .bind(role)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Create a professional in a user's agenda and return their ID
    pub async fn create_test_professional(&self, user_id: Uuid, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO professionals (id, user_id, name, specialty) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(user_id)
        .bind(name)
        .bind("Clínica Geral")
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test professional");
        id
    }

    /// Create a pending lab notification and return its ID
    pub async fn create_lab_notification(&self, user_id: Uuid, doctor: &str) -> Uuid {
        let id = Uuid::new_v4();
        let payload = serde_json::json!({
            "doctorName": doctor,
            "examDate": "2025-03-08",
            "report": { "fileName": "hemograma.pdf", "fileContent": "aGVsbG8=" }
        });
        sqlx::query(
            "INSERT INTO notifications (id, user_id, status, payload) \
             VALUES ($1, $2, 'pending'::notification_status, $3)",
        )
        .bind(id)
        .bind(user_id)
        .bind(payload)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test notification");
        id
    }

    /// Login and return the session token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        self.request_with_headers(method, path, body, token, &[]).await
    }

    /// Make an HTTP request with extra headers
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
