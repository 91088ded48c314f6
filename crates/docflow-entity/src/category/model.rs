//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docflow_core::types::{CategoryId, UserId};

use crate::record::StoredEntity;

/// A user-owned grouping for documents.
///
/// Documents reference categories weakly: deleting a category leaves any
/// `category_id` pointing at it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name. Not unique, even per user.
    pub name: String,
    /// Owning user.
    pub user_id: UserId,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Build a new category owned by `user_id`.
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            user_id,
            created_at: Utc::now(),
        }
    }
}

impl StoredEntity for Category {
    const COLLECTION: &'static str = "categories";
}
