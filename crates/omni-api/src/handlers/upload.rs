//! Upload and download handlers for event documents.

use std::time::Duration;

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use omni_core::error::AppError;
use omni_entity::event::FileSlot;

use crate::dto::response::UploadResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Query string for uploads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadQuery {
    /// Event the document belongs to.
    pub event_id: Uuid,
    /// Target slot category.
    pub slot: String,
}

/// POST /api/upload
///
/// Stores one multipart `file` field under the event's directory,
/// named by slot. The attachment list itself is updated by the
/// subsequent event update.
pub async fn upload_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let slot: FileSlot = query.slot.parse()?;

    let event = state
        .event_repo
        .find_by_id(query.event_id)
        .await?
        .filter(|e| e.user_id == auth.user_id)
        .ok_or_else(|| AppError::not_found("Event not found"))?;

    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field
                .file_name()
                .map(sanitize_file_name)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| AppError::validation("Uploaded file has no name"))?;
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;
            upload = Some((file_name, data));
        }
    }
    let (file_name, data) =
        upload.ok_or_else(|| AppError::validation("Missing 'file' multipart field"))?;

    let path = format!("{}/{}-{}", event.id, slot.as_str(), file_name);
    let timeout = Duration::from_secs(state.config.storage.operation_timeout_seconds);
    write_with_retry(&state, &path, data, timeout).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            url: state.store.public_url(&path),
            name: file_name,
            upload_date: chrono::Utc::now().date_naive(),
        }),
    ))
}

/// GET /uploads/{*path}
///
/// Streams a stored document. Served publicly, matching the static
/// upload directory it replaces.
pub async fn serve_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let stream = state.store.read(&path).await?;
    let content_type = content_type_for(&path);
    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, "inline"),
        ],
        Body::from_stream(stream),
    )
        .into_response())
}

/// Storage write bounded by the configured timeout, retried once.
async fn write_with_retry(
    state: &AppState,
    path: &str,
    data: Bytes,
    timeout: Duration,
) -> Result<(), AppError> {
    let attempt = |data: Bytes| async move {
        match tokio::time::timeout(timeout, state.store.write(path, data)).await {
            Ok(result) => result,
            Err(_) => Err(AppError::storage(format!("Storage write timed out: {path}"))),
        }
    };
    match attempt(data.clone()).await {
        Ok(()) => Ok(()),
        Err(e) => {
            warn!(%path, error = %e, "Storage write failed, retrying once");
            attempt(data).await
        }
    }
}

/// Strip any path components from a client-supplied file name.
fn sanitize_file_name(name: &str) -> String {
    name.rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next().map(str::to_ascii_lowercase).as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
