//! # omni-core
//!
//! Core crate for Omni Agenda. Contains configuration schemas, the
//! blob-storage trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Omni crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
