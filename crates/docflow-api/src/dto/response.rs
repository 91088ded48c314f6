//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docflow_core::types::{CategoryId, DocumentId, UserId};
use docflow_entity::{Category, Document, User};

/// Public user fields. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

/// Register/login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// The authenticated user.
    pub user: UserResponse,
}

impl TokenResponse {
    /// Build a bearer token response.
    pub fn bearer(access_token: String, user: &User) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user: UserResponse::from(user),
        }
    }
}

/// Category as returned to its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    /// Category ID.
    pub id: CategoryId,
    /// Name.
    pub name: String,
    /// Owner.
    pub user_id: UserId,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            user_id: category.user_id,
            created_at: category.created_at,
        }
    }
}

/// Document metadata without the storage locator or owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    /// Document ID.
    pub id: DocumentId,
    /// Title.
    pub title: String,
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub file_type: String,
    /// Size in bytes.
    pub file_size: u64,
    /// Category, if any.
    pub category_id: Option<CategoryId>,
    /// Tags.
    pub tags: Vec<String>,
    /// Upload time.
    pub uploaded_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            file_name: doc.file_name,
            file_type: doc.file_type,
            file_size: doc.file_size,
            category_id: doc.category_id,
            tags: doc.tags,
            uploaded_at: doc.uploaded_at,
        }
    }
}

/// Plain message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Record store backend and reachability.
    pub database: String,
    /// File storage reachability.
    pub storage: String,
    /// Server version.
    pub version: String,
}
