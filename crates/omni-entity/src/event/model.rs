//! Health event entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::attachment::Attachment;
use super::event_type::EventType;

/// A scheduled health-related occurrence owned by a user and a professional.
///
/// Start and end times are `HH:MM` local strings with no timezone; their
/// lexicographic order equals chronological order, which the overlap query
/// relies on. The calendar date is UTC-normalized.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HealthEvent {
    /// Unique event identifier.
    pub id: Uuid,
    /// Event title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional clinical observation; shown in place of the description.
    pub observation: Option<String>,
    /// UTC-normalized calendar date.
    pub date: NaiveDate,
    /// Start time of day, `HH:MM`.
    pub start_time: String,
    /// End time of day, `HH:MM`.
    pub end_time: String,
    /// Kind of occurrence.
    pub event_type: EventType,
    /// Owning user (referenced by id, never embedded).
    pub user_id: Uuid,
    /// Professional the event is booked with (referenced by id).
    pub professional_id: Uuid,
    /// Attached documents, at most one per slot.
    pub attachments: Json<Vec<Attachment>>,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
    /// When the event was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a new health event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Event title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional observation.
    pub observation: Option<String>,
    /// UTC-normalized calendar date.
    pub date: NaiveDate,
    /// Start time, `HH:MM`.
    pub start_time: String,
    /// End time, `HH:MM`.
    pub end_time: String,
    /// Kind of occurrence.
    pub event_type: EventType,
    /// Owning user.
    pub user_id: Uuid,
    /// Professional reference.
    pub professional_id: Uuid,
    /// Initial attachment list.
    pub attachments: Vec<Attachment>,
}

/// Data for updating an existing health event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// The event ID to update.
    pub id: Uuid,
    /// New title.
    pub title: String,
    /// New description.
    pub description: Option<String>,
    /// New observation.
    pub observation: Option<String>,
    /// New UTC-normalized date.
    pub date: NaiveDate,
    /// New start time, `HH:MM`.
    pub start_time: String,
    /// New end time, `HH:MM`.
    pub end_time: String,
    /// New event type.
    pub event_type: EventType,
    /// New professional reference.
    pub professional_id: Uuid,
    /// Replacement attachment list.
    pub attachments: Vec<Attachment>,
}
