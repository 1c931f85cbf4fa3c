//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::payload::NotificationPayload;
use super::status::NotificationStatus;

/// An inbound notification delivered to a user.
///
/// Owned by the inbound integration; the event services only transition
/// its status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Lifecycle status.
    pub status: NotificationStatus,
    /// Structured payload (lab report or report reference).
    pub payload: Json<NotificationPayload>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check whether the notification has not been acted on yet.
    pub fn is_pending(&self) -> bool {
        self.status == NotificationStatus::Pending
    }
}
