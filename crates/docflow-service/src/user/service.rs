//! User account service.

use std::sync::Arc;

use tracing::info;
use validator::{Validate, ValidationError};

use docflow_auth::jwt::JwtEncoder;
use docflow_auth::password::PasswordHasher;
use docflow_core::error::AppError;
use docflow_database::repositories::UserRepository;
use docflow_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// Registration input, validated by `create_account`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(custom(function = "not_blank"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Username is required".into()));
    }
    Ok(())
}

/// Login input.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// A freshly issued token and the user it belongs to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Signed bearer token.
    pub access_token: String,
    /// The authenticated user.
    pub user: User,
}

/// Handles registration, login, and profile lookup.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
        }
    }

    /// Create an account without issuing a token.
    ///
    /// Email uniqueness is checked before username uniqueness.
    pub async fn create_account(&self, req: RegisterRequest) -> Result<User, AppError> {
        req.validate().map_err(|e| AppError::validation(e.to_string()))?;

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }
        if self.users.find_by_username(&req.username).await?.is_some() {
            return Err(AppError::conflict("Username already taken"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = User::new(CreateUser {
            username: req.username,
            email: req.email,
            password_hash,
        });
        self.users.create(&user).await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Register a new account and log it in.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthSession, AppError> {
        let user = self.create_account(req).await?;
        let access_token = self.encoder.issue(user.id)?;
        Ok(AuthSession { access_token, user })
    }

    /// Exchange email and password for a token.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthSession, AppError> {
        let user = self
            .users
            .find_by_email(&req.email)
            .await?
            .ok_or_else(AppError::invalid_credentials)?;

        if !self.hasher.verify_password(&req.password, &user.password_hash) {
            return Err(AppError::invalid_credentials());
        }

        let access_token = self.encoder.issue(user.id)?;
        info!(user_id = %user.id, "User logged in");
        Ok(AuthSession { access_token, user })
    }

    /// The acting user's stored profile.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("User not found"))
    }
}
