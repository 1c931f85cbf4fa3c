//! Professional handlers — list and register.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use validator::Validate;

use omni_core::error::AppError;
use omni_entity::professional::{CreateProfessional, Professional};

use crate::dto::request::CreateProfessionalRequest;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::UserIdQuery;
use crate::state::AppState;

/// GET /api/professionals
pub async fn list_professionals(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Vec<Professional>>, ApiError> {
    let user_id = auth.ensure_is(query.user_id)?;
    let professionals = state.professional_repo.find_by_user(user_id).await?;
    Ok(Json(professionals))
}

/// POST /api/professionals
pub async fn create_professional(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UserIdQuery>,
    Json(req): Json<CreateProfessionalRequest>,
) -> Result<(StatusCode, Json<Professional>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let user_id = auth.ensure_is(query.user_id)?;

    let created = state
        .professional_repo
        .create(&CreateProfessional {
            user_id,
            name: req.name,
            specialty: req.specialty,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}
