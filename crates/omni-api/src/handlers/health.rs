//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => "connected",
        Err(_) => "unreachable",
    };
    let storage = match state.store.health_check().await {
        Ok(true) => "available",
        _ => "unavailable",
    };

    Json(HealthResponse {
        status: if database == "connected" && storage == "available" {
            "ok".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        storage: storage.to_string(),
    })
}
