//! Professional entity.

pub mod model;

pub use model::{CreateProfessional, Professional};
