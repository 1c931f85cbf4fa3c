//! Professional entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A healthcare professional referenced by events.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    /// Unique professional identifier.
    pub id: Uuid,
    /// The user whose agenda this professional belongs to.
    pub user_id: Uuid,
    /// Full name.
    pub name: String,
    /// Medical specialty, if known.
    pub specialty: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a professional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfessional {
    /// Owning user.
    pub user_id: Uuid,
    /// Full name.
    pub name: String,
    /// Specialty (optional).
    pub specialty: Option<String>,
}
