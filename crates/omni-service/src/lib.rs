//! # omni-service
//!
//! Business logic services for Omni Agenda: event scheduling with
//! overlap rejection, file-slot reconciliation, notification promotion,
//! and the read-only document repository view.

pub mod event;
pub mod promotion;
pub mod repository;
pub mod schedule;

pub use event::{EventInput, EventService, UpdateOutcome};
pub use promotion::PromotionService;
pub use repository::RepositoryService;
