//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docflow_core::types::UserId;

use crate::record::StoredEntity;

/// A registered user.
///
/// The password hash is part of the stored record; API responses use a
/// separate DTO that leaves it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Salted password hash.
    pub password_hash: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new user with a fresh id and creation time.
    pub fn new(data: CreateUser) -> Self {
        Self {
            id: UserId::new(),
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            created_at: Utc::now(),
        }
    }
}

impl StoredEntity for User {
    const COLLECTION: &'static str = "users";
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
