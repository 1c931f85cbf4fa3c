//! Pure scheduling checks: field validation and time-range overlap.

pub mod overlap;
pub mod validate;

pub use overlap::ranges_overlap;
pub use validate::{normalize_event_date, validate_event_times, TimeValidation};
