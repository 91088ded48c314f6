//! Category repository implementation.

use std::sync::Arc;

use serde_json::Value;

use docflow_core::result::AppResult;
use docflow_core::traits::RecordStore;
use docflow_core::types::record::record;
use docflow_core::types::{CategoryId, UserId};
use docflow_entity::StoredEntity;
use docflow_entity::category::Category;

/// Repository for per-user categories.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    store: Arc<dyn RecordStore>,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Persist a new category.
    pub async fn create(&self, category: &Category) -> AppResult<()> {
        self.store
            .insert_one(Category::COLLECTION, category.to_record()?)
            .await
    }

    /// All categories owned by `owner`, in creation order.
    pub async fn find_by_owner(&self, owner: UserId) -> AppResult<Vec<Category>> {
        self.store
            .find(Category::COLLECTION, &record([("user_id", Value::from(owner))]))
            .await?
            .into_iter()
            .map(Category::from_record)
            .collect()
    }

    /// Delete a category if `owner` owns it. Returns whether one was removed.
    pub async fn delete(&self, owner: UserId, id: CategoryId) -> AppResult<bool> {
        let filter = record([("id", Value::from(id)), ("user_id", Value::from(owner))]);
        let deleted = self.store.delete_one(Category::COLLECTION, &filter).await?;
        Ok(deleted > 0)
    }
}
