//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use omni_core::config::auth::AuthConfig;
use omni_core::error::AppError;

use super::claims::Claims;

/// Validates signed JWT session tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation parameters (HS256, expiry enforced).
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder").finish_non_exhaustive()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Decodes and validates a session token, returning its claims.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::authentication(format!("Invalid session token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use omni_core::config::auth::AuthConfig;
    use omni_entity::user::UserRole;
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_hours: 1,
        }
    }

    #[test]
    fn test_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user_id = Uuid::new_v4();
        let token = encoder.generate_token(user_id, UserRole::Receptor).unwrap();
        let claims = decoder.decode_token(&token).unwrap();

        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.role, UserRole::Receptor);
    }

    #[test]
    fn test_rejects_tampered_token() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&AuthConfig {
            jwt_secret: "other-secret".to_string(),
            ..test_config()
        });

        let token = encoder
            .generate_token(Uuid::new_v4(), UserRole::Issuer)
            .unwrap();
        assert!(decoder.decode_token(&token).is_err());
    }
}
