//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use docflow_core::types::{CategoryId, DocumentId, Record, UserId};

use crate::record::StoredEntity;

/// Metadata for one uploaded file.
///
/// `file_name`, `file_type`, `file_size` and `file_path` are fixed at
/// upload. Only `title`, `category_id` and `tags` change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier.
    pub id: DocumentId,
    /// User-supplied title.
    pub title: String,
    /// Original client file name.
    pub file_name: String,
    /// Storage locator for the content.
    pub file_path: String,
    /// MIME type.
    pub file_type: String,
    /// Content size in bytes.
    pub file_size: u64,
    /// Optional category. Not checked against existing categories.
    pub category_id: Option<CategoryId>,
    /// Ordered tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Owning user.
    pub user_id: UserId,
    /// When the document was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    /// Build a new document owned by `user_id`.
    pub fn new(user_id: UserId, data: CreateDocument) -> Self {
        Self {
            id: DocumentId::new(),
            title: data.title,
            file_name: data.file_name,
            file_path: data.file_path,
            file_type: data.file_type,
            file_size: data.file_size,
            category_id: data.category_id,
            tags: data.tags,
            user_id,
            uploaded_at: Utc::now(),
        }
    }

    /// Apply a partial update in place. Absent fields are left alone.
    pub fn apply(&mut self, update: &UpdateDocument) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(category_id) = update.category_id {
            self.category_id = Some(category_id);
        }
        if let Some(tags) = &update.tags {
            self.tags = tags.clone();
        }
    }
}

impl StoredEntity for Document {
    const COLLECTION: &'static str = "documents";
}

/// Data required to create a document record after its content is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Title.
    pub title: String,
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub file_type: String,
    /// Size in bytes.
    pub file_size: u64,
    /// Storage locator.
    pub file_path: String,
    /// Optional category.
    pub category_id: Option<CategoryId>,
    /// Already-parsed tags.
    pub tags: Vec<String>,
}

/// Partial update for a document.
///
/// Each field is independently optional: `None` means "leave unchanged".
/// There is no way to clear `category_id` through an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDocument {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Replacement tag list.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl UpdateDocument {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category_id.is_none() && self.tags.is_none()
    }

    /// The store-level change set: only supplied fields.
    pub fn to_changes(&self) -> Record {
        let mut changes = Record::new();
        if let Some(title) = &self.title {
            changes.insert("title".into(), Value::String(title.clone()));
        }
        if let Some(category_id) = self.category_id {
            changes.insert("category_id".into(), category_id.into());
        }
        if let Some(tags) = &self.tags {
            changes.insert(
                "tags".into(),
                Value::Array(tags.iter().cloned().map(Value::String).collect()),
            );
        }
        changes
    }
}
