//! # omni-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all Omni Agenda entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
