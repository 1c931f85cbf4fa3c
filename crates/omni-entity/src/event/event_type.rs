//! Health event type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of health occurrence an event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// A consultation with a professional.
    Consultation,
    /// A laboratory or imaging exam.
    Exam,
    /// A medical procedure.
    Procedure,
    /// A medication schedule entry.
    Medication,
}

impl EventType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consultation => "consultation",
            Self::Exam => "exam",
            Self::Procedure => "procedure",
            Self::Medication => "medication",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = omni_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "consultation" => Ok(Self::Consultation),
            "exam" => Ok(Self::Exam),
            "procedure" => Ok(Self::Procedure),
            "medication" => Ok(Self::Medication),
            _ => Err(omni_core::AppError::validation(format!(
                "Invalid event type: '{s}'. Expected one of: consultation, exam, procedure, medication"
            ))),
        }
    }
}
