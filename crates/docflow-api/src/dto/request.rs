//! Request DTOs.

use serde::{Deserialize, Serialize};

use docflow_core::types::CategoryId;
use docflow_entity::document::UpdateDocument;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Password.
    pub password: String,
}

impl From<RegisterRequest> for docflow_service::user::RegisterRequest {
    fn from(req: RegisterRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email.
    pub email: String,
    /// Password.
    pub password: String,
}

impl From<LoginRequest> for docflow_service::user::LoginRequest {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

/// Category creation body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    /// Category name.
    pub name: String,
}

/// Partial document update. `null` and missing fields are both "unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Replacement tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl From<UpdateDocumentRequest> for UpdateDocument {
    fn from(req: UpdateDocumentRequest) -> Self {
        Self {
            title: req.title,
            category_id: req.category_id,
            tags: req.tags,
        }
    }
}

/// Query string for `GET /documents`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentListParams {
    /// Category filter, as sent by the client.
    pub category_id: Option<String>,
    /// Search term.
    pub search: Option<String>,
}
