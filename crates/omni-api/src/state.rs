//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use omni_auth::jwt::decoder::JwtDecoder;
use omni_auth::jwt::encoder::JwtEncoder;
use omni_auth::password::hasher::PasswordHasher;
use omni_core::config::AppConfig;
use omni_core::traits::DocumentStore;

use omni_database::repositories::{
    EventRepository, NotificationRepository, ProfessionalRepository, ReportRepository,
    UserRepository,
};

use omni_service::event::service::EventService;
use omni_service::promotion::service::PromotionService;
use omni_service::repository::service::RepositoryService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Document storage backend.
    pub store: Arc<dyn DocumentStore>,

    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2).
    pub password_hasher: Arc<PasswordHasher>,

    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Event repository.
    pub event_repo: Arc<EventRepository>,
    /// Professional repository.
    pub professional_repo: Arc<ProfessionalRepository>,
    /// Notification repository.
    pub notification_repo: Arc<NotificationRepository>,
    /// Report repository.
    pub report_repo: Arc<ReportRepository>,

    /// Event lifecycle service.
    pub event_service: Arc<EventService>,
    /// Notification promotion service.
    pub promotion_service: Arc<PromotionService>,
    /// Repository view service.
    pub repository_service: Arc<RepositoryService>,
}
