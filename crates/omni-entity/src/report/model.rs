//! Report entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Delivery status of an issued report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "report_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// Issued but not yet opened by the recipient.
    Pending,
    /// Opened by the recipient.
    Viewed,
}

impl ReportStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Viewed => "viewed",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = omni_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "viewed" => Ok(Self::Viewed),
            _ => Err(omni_core::AppError::validation(format!(
                "Invalid report status: '{s}'. Expected one of: pending, viewed"
            ))),
        }
    }
}

/// A report issued to a user, referenced by notifications.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique report identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Report title.
    pub title: String,
    /// Issuing protocol number.
    pub protocol: String,
    /// Delivery status.
    pub status: ReportStatus,
    /// When the report was issued.
    pub created_at: DateTime<Utc>,
    /// When the report was first viewed.
    pub viewed_at: Option<DateTime<Utc>>,
}
