//! User repository implementation.

use std::sync::Arc;

use serde_json::json;

use docflow_core::result::AppResult;
use docflow_core::traits::RecordStore;
use docflow_core::types::UserId;
use docflow_core::types::record::record;
use docflow_entity::StoredEntity;
use docflow_entity::user::User;

/// Repository for user lookup and creation.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Arc<dyn RecordStore>,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        self.find_by("id", json!(id.to_string())).await
    }

    /// Find a user by exact email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_by("email", json!(email)).await
    }

    /// Find a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_by("username", json!(username)).await
    }

    /// Persist a new user.
    pub async fn create(&self, user: &User) -> AppResult<()> {
        self.store
            .insert_one(User::COLLECTION, user.to_record()?)
            .await
    }

    async fn find_by(&self, field: &str, value: serde_json::Value) -> AppResult<Option<User>> {
        self.store
            .find_one(User::COLLECTION, &record([(field, value)]))
            .await?
            .map(User::from_record)
            .transpose()
    }
}
