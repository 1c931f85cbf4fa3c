//! # omni-entity
//!
//! Domain entity models for Omni Agenda: health events with their file
//! slots, professionals, notifications, reports, and users.

pub mod event;
pub mod notification;
pub mod professional;
pub mod report;
pub mod user;
