//! Integration test suite.
//!
//! These tests exercise the full router against a live PostgreSQL
//! instance (see `config/test.toml`) and are ignored by default.

mod helpers;

mod auth_test;
mod event_test;
mod notification_test;
