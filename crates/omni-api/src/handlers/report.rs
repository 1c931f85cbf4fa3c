//! Report handlers — status transitions.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use omni_core::error::AppError;
use omni_entity::report::ReportStatus;
use omni_entity::user::UserRole;

use crate::dto::request::StatusPatchRequest;
use crate::dto::response::SuccessResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PATCH /api/reports/{id}/status
///
/// The recipient marks their own reports; an issuer may transition any
/// report it delivered.
pub async fn patch_report_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusPatchRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let status: ReportStatus = req.status.parse()?;

    let report = state
        .report_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Report not found"))?;
    if report.user_id != auth.user_id && auth.role != UserRole::Issuer {
        return Err(AppError::not_found("Report not found").into());
    }

    state.report_repo.set_status(report.id, status).await?;
    tracing::info!(report_id = %report.id, status = %status, "Report status updated");
    Ok(Json(SuccessResponse::ok()))
}
