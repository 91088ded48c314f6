//! Resolves bearer tokens to the acting user.

use tracing::debug;

use docflow_core::error::AppError;
use docflow_database::repositories::UserRepository;
use docflow_entity::user::User;

use crate::jwt::JwtDecoder;

/// Validates a token and loads the user it names.
///
/// Token failures pass through as `TokenInvalid` / `TokenExpired`; a
/// valid token whose user no longer exists is `Unauthorized`.
#[derive(Debug, Clone)]
pub struct AccessControl {
    decoder: JwtDecoder,
    users: UserRepository,
}

impl AccessControl {
    /// Creates a new access-control step.
    pub fn new(decoder: JwtDecoder, users: UserRepository) -> Self {
        Self { decoder, users }
    }

    /// Resolve `token` to a stored user.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let user_id = self.decoder.validate(token)?;

        let user = self.users.find_by_id(user_id).await?.ok_or_else(|| {
            debug!(%user_id, "Token subject no longer exists");
            AppError::unauthorized("User not found")
        })?;

        Ok(user)
    }
}
