//! Notification handlers — list, status transitions, promotion.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use omni_core::error::AppError;
use omni_entity::event::HealthEvent;
use omni_entity::notification::{Notification, NotificationStatus};

use crate::dto::request::StatusPatchRequest;
use crate::dto::response::SuccessResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::UserIdQuery;
use crate::state::AppState;

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let user_id = auth.ensure_is(query.user_id)?;
    let notifications = state.notification_repo.find_by_user(user_id).await?;
    Ok(Json(notifications))
}

/// PATCH /api/notifications/{id}
pub async fn patch_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusPatchRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let status: NotificationStatus = req.status.parse()?;

    let notification = state
        .notification_repo
        .find_by_id(id)
        .await?
        .filter(|n| n.user_id == auth.user_id)
        .ok_or_else(|| AppError::not_found("Notification not found"))?;

    state
        .notification_repo
        .set_status(notification.id, status)
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/notifications/{id}/promote
pub async fn promote_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UserIdQuery>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<HealthEvent>), ApiError> {
    let user_id = auth.ensure_is(query.user_id)?;
    let event = state.promotion_service.promote(user_id, id).await?;
    Ok((StatusCode::CREATED, Json(event)))
}
