//! Promotion of inbound lab notifications into calendar events.

pub mod service;

pub use service::PromotionService;
