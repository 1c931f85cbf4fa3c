//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use omni_entity::event::{Attachment, EventType};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Event create request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Event title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional observation.
    pub observation: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, `HH:MM`.
    pub start_time: String,
    /// End time, `HH:MM`.
    pub end_time: String,
    /// Kind of occurrence.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Professional to book with.
    pub professional_id: Uuid,
    /// Attachments supplied with the request.
    #[serde(default)]
    pub files: Vec<Attachment>,
    /// Source notification to archive atomically with the create.
    pub notification_id: Option<Uuid>,
}

/// Event update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    /// The event to update.
    pub id: Uuid,
    /// New title.
    pub title: String,
    /// New description.
    pub description: Option<String>,
    /// New observation.
    pub observation: Option<String>,
    /// New date, `YYYY-MM-DD`.
    pub date: String,
    /// New start time, `HH:MM`.
    pub start_time: String,
    /// New end time, `HH:MM`.
    pub end_time: String,
    /// New event type.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// New professional reference.
    pub professional_id: Uuid,
    /// Attachments to merge through the slot reconciler.
    #[serde(default)]
    pub files: Vec<Attachment>,
    /// Source notification to archive atomically with the update.
    pub notification_id: Option<Uuid>,
}

/// Event delete request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventRequest {
    /// The event to delete.
    pub id: Uuid,
    /// Whether to also remove the stored attachment files.
    #[serde(default)]
    pub delete_files: bool,
}

/// Professional create request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfessionalRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Medical specialty.
    pub specialty: Option<String>,
}

/// Status patch body shared by notifications and reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusPatchRequest {
    /// The target status, case-insensitive.
    pub status: String,
}
