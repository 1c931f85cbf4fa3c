//! Notification entity: model, status lifecycle, and payload union.

pub mod model;
pub mod payload;
pub mod status;

pub use model::Notification;
pub use payload::{EmbeddedReport, LabReportPayload, NotificationPayload, ReportReferencePayload};
pub use status::NotificationStatus;
