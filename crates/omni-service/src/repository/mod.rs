//! Read-only document repository view.

pub mod service;
pub mod view;

pub use service::RepositoryService;
pub use view::{build_view, RepositoryEntry, RepositoryGroup, RepositoryView, SlotCount};
