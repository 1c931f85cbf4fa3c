//! Core traits defined in `omni-core` and implemented by other crates.

pub mod storage;

pub use storage::DocumentStore;
