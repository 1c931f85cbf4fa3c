//! Event handlers — list, create, update, delete.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use omni_core::error::AppError;
use omni_entity::event::HealthEvent;
use omni_service::event::service::{EventInput, UpdateOutcome};

use crate::dto::request::{CreateEventRequest, DeleteEventRequest, UpdateEventRequest};
use crate::dto::response::SuccessResponse;
use crate::error::{ApiError, ApiErrorResponse};
use crate::extractors::AuthUser;
use crate::handlers::UserIdQuery;
use crate::state::AppState;

/// Header through which a caller confirms replacing an existing result
/// document.
pub const OVERWRITE_HEADER: &str = "x-overwrite-result";

/// GET /api/events
///
/// The list is always served fresh; intermediaries must not cache it.
pub async fn list_events(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UserIdQuery>,
) -> Result<Response, ApiError> {
    let user_id = auth.ensure_is(query.user_id)?;
    let events = state.event_service.list(user_id).await?;
    Ok(([(header::CACHE_CONTROL, "no-store")], Json(events)).into_response())
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<HealthEvent>), ApiError> {
    let user_id = auth.ensure_is(query.user_id)?;
    let created = state
        .event_service
        .create(
            user_id,
            EventInput {
                title: req.title,
                description: req.description,
                observation: req.observation,
                date: req.date,
                start_time: req.start_time,
                end_time: req.end_time,
                event_type: req.event_type,
                professional_id: req.professional_id,
                attachments: req.files,
                notification_id: req.notification_id,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/events
///
/// Replacing an existing result document requires the
/// `x-overwrite-result: true` header; without it the update returns
/// 409 with a confirmation prompt and persists nothing.
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    headers: HeaderMap,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, ApiError> {
    let existing = state
        .event_repo
        .find_by_id(req.id)
        .await?
        .ok_or_else(|| AppError::not_found("Event not found"))?;
    if existing.user_id != auth.user_id {
        return Err(AppError::not_found("Event not found").into());
    }

    let overwrite = headers
        .get(OVERWRITE_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));

    let outcome = state
        .event_service
        .update(
            EventInput {
                title: req.title,
                description: req.description,
                observation: req.observation,
                date: req.date,
                start_time: req.start_time,
                end_time: req.end_time,
                event_type: req.event_type,
                professional_id: req.professional_id,
                attachments: req.files,
                notification_id: req.notification_id,
            },
            req.id,
            overwrite,
        )
        .await?;

    match outcome {
        UpdateOutcome::Updated(event) => Ok(Json(event).into_response()),
        UpdateOutcome::ResultConflict { prompt } => Ok((
            StatusCode::CONFLICT,
            Json(ApiErrorResponse {
                error: "RESULT_CONFLICT".to_string(),
                message: prompt,
            }),
        )
            .into_response()),
    }
}

/// DELETE /api/events
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<DeleteEventRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let existing = state
        .event_repo
        .find_by_id(req.id)
        .await?
        .ok_or_else(|| AppError::not_found("Event not found"))?;
    if existing.user_id != auth.user_id {
        return Err(AppError::not_found("Event not found").into());
    }

    state.event_service.delete(req.id, req.delete_files).await?;
    Ok(Json(SuccessResponse::ok()))
}
