//! JWT claims binding a user id to its role.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use omni_entity::user::UserRole;

/// Claims carried by a session token.
///
/// The token binds exactly the two fields the session is scoped by:
/// user id and role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's id.
    pub sub: Uuid,
    /// The user's role at issue time.
    pub role: UserRole,
    /// Issued-at (Unix seconds).
    pub iat: i64,
    /// Expiration (Unix seconds).
    pub exp: i64,
}

impl Claims {
    /// Returns the user id this token was issued for.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }
}
