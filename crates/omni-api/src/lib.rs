//! # omni-api
//!
//! HTTP API layer for Omni Agenda built on Axum.
//!
//! Provides the REST endpoints, auth extractor, middleware, DTOs, and
//! the `ApiError` wrapper mapping `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_state;
pub use router::build_router;
pub use state::AppState;
