//! Notification status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an inbound notification.
///
/// Notifications are created externally as `Pending`; promoting one into
/// an event archives it, and the final promotion step marks it read.
/// They transition state but are never deleted by the event services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    /// Delivered but not yet acted on.
    Pending,
    /// Seen by the user.
    Read,
    /// Consumed by promotion into an event.
    Archived,
    /// The referenced report was opened.
    Viewed,
}

impl NotificationStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Read => "read",
            Self::Archived => "archived",
            Self::Viewed => "viewed",
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationStatus {
    type Err = omni_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "read" => Ok(Self::Read),
            "archived" => Ok(Self::Archived),
            "viewed" => Ok(Self::Viewed),
            _ => Err(omni_core::AppError::validation(format!(
                "Invalid notification status: '{s}'. Expected one of: pending, read, archived, viewed"
            ))),
        }
    }
}
