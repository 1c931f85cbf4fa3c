//! Report entity.

pub mod model;

pub use model::{Report, ReportStatus};
