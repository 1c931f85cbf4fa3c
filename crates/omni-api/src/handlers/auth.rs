//! Auth handlers — login.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use omni_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::LoginResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_repo
        .find_by_email(req.email.trim())
        .await?
        .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

    let valid = state
        .password_hasher
        .verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(AppError::authentication("Invalid email or password").into());
    }

    let token = state.jwt_encoder.generate_token(user.id, user.role)?;

    tracing::info!(user_id = %user.id, role = %user.role, "User logged in");
    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}
