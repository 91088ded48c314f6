//! JWT token validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use docflow_core::config::AuthConfig;
use docflow_core::error::AppError;
use docflow_core::types::UserId;

use super::claims::Claims;

/// Verifies token signatures and expiry.
///
/// Expiry is checked here against an explicit clock rather than by the
/// `jsonwebtoken` validator, which applies leeway.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Validate `token` now and return its subject.
    pub fn validate(&self, token: &str) -> Result<UserId, AppError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate `token` as of `now` and return its subject.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, AppError> {
        let claims = self.decode_claims(token)?;
        if claims.is_expired_at(now) {
            return Err(AppError::token_expired());
        }
        claims.user_id()
    }

    /// Verify the signature and structure, returning the raw claims.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::token_invalid("Invalid token signature")
                }
                jsonwebtoken::errors::ErrorKind::MissingRequiredClaim(claim) => {
                    AppError::token_invalid(format!("Token is missing claim: {claim}"))
                }
                _ => AppError::token_invalid(format!("Token validation failed: {e}")),
            })
    }
}
