//! Route definitions for the Omni Agenda HTTP API.
//!
//! API routes are mounted under `/api`; stored documents are served
//! under `/uploads`. The router receives `AppState` and passes it to
//! all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use std::time::Duration;

use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;
    let request_timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(event_routes())
        .merge(professional_routes())
        .merge(notification_routes())
        .merge(report_routes())
        .merge(repository_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .route("/uploads/{*path}", get(handlers::upload::serve_file))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints.
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(handlers::auth::login))
}

/// Event CRUD and document upload.
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::event::list_events))
        .route("/events", post(handlers::event::create_event))
        .route("/events", put(handlers::event::update_event))
        .route("/events", delete(handlers::event::delete_event))
        .route("/upload", post(handlers::upload::upload_file))
}

/// Professional listing and registration.
fn professional_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/professionals",
            get(handlers::professional::list_professionals),
        )
        .route(
            "/professionals",
            post(handlers::professional::create_professional),
        )
}

/// Notification listing, status transitions, and promotion.
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/{id}",
            patch(handlers::notification::patch_notification),
        )
        .route(
            "/notifications/{id}/promote",
            post(handlers::notification::promote_notification),
        )
}

/// Report status transitions.
fn report_routes() -> Router<AppState> {
    Router::new().route(
        "/reports/{id}/status",
        patch(handlers::report::patch_report_status),
    )
}

/// Document repository view.
fn repository_routes() -> Router<AppState> {
    Router::new().route("/repository", get(handlers::repository::get_repository))
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
