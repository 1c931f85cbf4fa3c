//! Event lifecycle: slot reconciliation and the create/update/delete
//! orchestration service.

pub mod service;
pub mod slots;

pub use service::{EventInput, EventService, UpdateOutcome};
pub use slots::{reconcile_slots, ReconcileOutcome, RESULT_OVERWRITE_PROMPT};
