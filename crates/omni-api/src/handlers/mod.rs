//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod event;
pub mod health;
pub mod notification;
pub mod professional;
pub mod report;
pub mod repository;
pub mod upload;

use serde::Deserialize;
use uuid::Uuid;

/// Query string carrying the legacy `userId` parameter.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    /// The user the caller claims to act for; must match the token.
    pub user_id: Option<Uuid>,
}
