//! File-slot attachments carried by a health event.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of document categories attachable to an event.
///
/// An event holds at most one attachment per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileSlot {
    /// Exam/procedure request form.
    Request,
    /// Insurance authorization.
    Authorization,
    /// Medical certificate.
    Certificate,
    /// Lab report or exam result.
    Result,
    /// Prescription.
    Prescription,
    /// Invoice / fiscal receipt.
    Invoice,
}

impl FileSlot {
    /// All slots, in display order.
    pub const ALL: [FileSlot; 6] = [
        Self::Request,
        Self::Authorization,
        Self::Certificate,
        Self::Result,
        Self::Prescription,
        Self::Invoice,
    ];

    /// Return the slot as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Authorization => "authorization",
            Self::Certificate => "certificate",
            Self::Result => "result",
            Self::Prescription => "prescription",
            Self::Invoice => "invoice",
        }
    }
}

impl fmt::Display for FileSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileSlot {
    type Err = omni_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "request" => Ok(Self::Request),
            "authorization" => Ok(Self::Authorization),
            "certificate" => Ok(Self::Certificate),
            "result" => Ok(Self::Result),
            "prescription" => Ok(Self::Prescription),
            "invoice" => Ok(Self::Invoice),
            _ => Err(omni_core::AppError::validation(format!(
                "Invalid file slot: '{s}'. Expected one of: request, authorization, certificate, result, prescription, invoice"
            ))),
        }
    }
}

/// A document attached to a health event, keyed by slot.
///
/// Attachments live inside the event row as a JSONB list; they have no
/// independent lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Slot category this document occupies.
    pub slot: FileSlot,
    /// Display name of the document.
    pub name: String,
    /// Public URL under which the stored file is served.
    pub url: String,
    /// When the document was uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<NaiveDate>,
    /// When the document expires, if applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

impl Attachment {
    /// Whether the entry carries the fields an attachment must have.
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty() && !self.url.trim().is_empty()
    }
}
