//! Repository view handler.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use uuid::Uuid;

use omni_service::repository::view::RepositoryView;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Query string for the repository view.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryQuery {
    /// The user the caller claims to act for; must match the token.
    pub user_id: Option<Uuid>,
    /// Case-insensitive search term.
    pub q: Option<String>,
}

/// GET /api/repository
pub async fn get_repository(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<RepositoryQuery>,
) -> Result<Json<RepositoryView>, ApiError> {
    let user_id = auth.ensure_is(query.user_id)?;
    let view = state
        .repository_service
        .view(user_id, query.q.as_deref())
        .await?;
    Ok(Json(view))
}
