//! Application wiring — builds the shared state from configuration.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use omni_auth::jwt::decoder::JwtDecoder;
use omni_auth::jwt::encoder::JwtEncoder;
use omni_auth::password::hasher::PasswordHasher;
use omni_core::config::AppConfig;
use omni_core::error::AppError;
use omni_database::repositories::{
    EventRepository, NotificationRepository, ProfessionalRepository, ReportRepository,
    UserRepository,
};
use omni_service::event::service::EventService;
use omni_service::promotion::service::PromotionService;
use omni_service::repository::service::RepositoryService;
use omni_storage::LocalDocumentStore;

use crate::state::AppState;

/// Construct the full application state: storage, auth, repositories,
/// and services, all wired from configuration.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let store: Arc<dyn omni_core::traits::DocumentStore> =
        Arc::new(LocalDocumentStore::new(&config.storage).await?);
    let storage_timeout = Duration::from_secs(config.storage.operation_timeout_seconds);

    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let password_hasher = Arc::new(PasswordHasher::new());

    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let event_repo = Arc::new(EventRepository::new(db_pool.clone()));
    let professional_repo = Arc::new(ProfessionalRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
    let report_repo = Arc::new(ReportRepository::new(db_pool.clone()));

    let event_service = EventService::new(
        db_pool.clone(),
        Arc::clone(&event_repo),
        Arc::clone(&notification_repo),
        Arc::clone(&store),
        storage_timeout,
    );
    let promotion_service = Arc::new(PromotionService::new(
        event_service.clone(),
        Arc::clone(&event_repo),
        Arc::clone(&professional_repo),
        Arc::clone(&notification_repo),
        Arc::clone(&report_repo),
        Arc::clone(&store),
        config.events.clone(),
        storage_timeout,
    ));
    let repository_service = Arc::new(RepositoryService::new(
        Arc::clone(&event_repo),
        Arc::clone(&professional_repo),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        store,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        user_repo,
        event_repo,
        professional_repo,
        notification_repo,
        report_repo,
        event_service: Arc::new(event_service),
        promotion_service,
        repository_service,
    })
}
