//! Health event entity: model, type enumeration, and file-slot attachments.

pub mod attachment;
pub mod event_type;
pub mod model;

pub use attachment::{Attachment, FileSlot};
pub use event_type::EventType;
pub use model::{CreateEvent, HealthEvent, UpdateEvent};
