//! # omni-storage
//!
//! Local filesystem implementation of the [`omni_core::traits::DocumentStore`]
//! trait used for event document attachments.

pub mod local;

pub use local::LocalDocumentStore;
