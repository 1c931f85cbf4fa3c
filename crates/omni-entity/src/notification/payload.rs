//! Notification payload union.
//!
//! Inbound notifications carry one of two payload shapes: a lab report
//! with an embedded file, or a reference to a report stored elsewhere.
//! The union is discriminated structurally by serde — each variant has
//! required fields the other lacks — so no caller ever inspects raw JSON.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload carried by a notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotificationPayload {
    /// A lab report with embedded file content.
    Lab(LabReportPayload),
    /// A reference to an externally stored report.
    Report(ReportReferencePayload),
}

/// Lab report payload: names the requesting doctor and embeds the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabReportPayload {
    /// Name of the requesting doctor.
    pub doctor_name: String,
    /// Date the exam was performed, `YYYY-MM-DD`.
    pub exam_date: String,
    /// The embedded report file.
    pub report: EmbeddedReport,
    /// Identifier of the report record to mark viewed, if one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<Uuid>,
}

/// File content embedded in a lab payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedReport {
    /// Original file name.
    pub file_name: String,
    /// Base64-encoded file content.
    pub file_content: String,
}

/// Generic report-reference payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportReferencePayload {
    /// Identifier of the referenced report.
    pub report_id: Uuid,
    /// Report title.
    pub title: String,
    /// Issuing protocol number.
    pub protocol: String,
}
