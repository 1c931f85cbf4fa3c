//! # omni-auth
//!
//! Password hashing and JWT session tokens binding a user id to its role.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
