//! Document repository implementation.

use std::sync::Arc;

use serde_json::Value;

use docflow_core::result::AppResult;
use docflow_core::traits::RecordStore;
use docflow_core::types::record::record;
use docflow_core::types::{CategoryId, DocumentId, Record, UserId};
use docflow_entity::StoredEntity;
use docflow_entity::document::{Document, UpdateDocument};

/// Repository for document metadata.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    store: Arc<dyn RecordStore>,
}

fn owned(owner: UserId, id: DocumentId) -> Record {
    record([("id", Value::from(id)), ("user_id", Value::from(owner))])
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Persist a new document.
    pub async fn create(&self, document: &Document) -> AppResult<()> {
        self.store
            .insert_one(Document::COLLECTION, document.to_record()?)
            .await
    }

    /// Documents owned by `owner`, optionally restricted to one category.
    pub async fn find_by_owner(
        &self,
        owner: UserId,
        category_id: Option<CategoryId>,
    ) -> AppResult<Vec<Document>> {
        let mut filter = record([("user_id", Value::from(owner))]);
        if let Some(category_id) = category_id {
            filter.insert("category_id".into(), Value::from(category_id));
        }

        self.store
            .find(Document::COLLECTION, &filter)
            .await?
            .into_iter()
            .map(Document::from_record)
            .collect()
    }

    /// A document by id, only if `owner` owns it.
    pub async fn find_owned(&self, owner: UserId, id: DocumentId) -> AppResult<Option<Document>> {
        self.store
            .find_one(Document::COLLECTION, &owned(owner, id))
            .await?
            .map(Document::from_record)
            .transpose()
    }

    /// Apply a partial update. Returns whether a matching document existed.
    ///
    /// An empty update still reports whether the document exists.
    pub async fn update(
        &self,
        owner: UserId,
        id: DocumentId,
        update: &UpdateDocument,
    ) -> AppResult<bool> {
        if update.is_empty() {
            return Ok(self.find_owned(owner, id).await?.is_some());
        }
        let modified = self
            .store
            .update_one(Document::COLLECTION, &owned(owner, id), update.to_changes())
            .await?;
        Ok(modified > 0)
    }

    /// Delete a document record. Returns whether one was removed.
    pub async fn delete(&self, owner: UserId, id: DocumentId) -> AppResult<bool> {
        let deleted = self
            .store
            .delete_one(Document::COLLECTION, &owned(owner, id))
            .await?;
        Ok(deleted > 0)
    }
}
