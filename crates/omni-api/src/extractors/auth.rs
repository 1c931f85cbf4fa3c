//! `AuthUser` extractor — pulls the JWT from the Authorization header
//! and injects the authenticated identity into handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use omni_core::error::AppError;
use omni_entity::user::UserRole;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user identity available in handlers.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// The authenticated user's id.
    pub user_id: Uuid,
    /// The role bound into the session token.
    pub role: UserRole,
}

impl AuthUser {
    /// Reject a caller-supplied user id that does not match the token.
    ///
    /// Endpoints keep a `userId` query parameter for compatibility; it
    /// may only name the authenticated user.
    pub fn ensure_is(&self, user_id: Option<Uuid>) -> Result<Uuid, AppError> {
        match user_id {
            Some(id) if id != self.user_id => Err(AppError::authentication(
                "Token does not match the requested user",
            )),
            _ => Ok(self.user_id),
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode_token(token)?;

        Ok(AuthUser {
            user_id: claims.user_id(),
            role: claims.role,
        })
    }
}
