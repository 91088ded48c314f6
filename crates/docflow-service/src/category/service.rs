//! Category CRUD scoped to the acting user.

use std::sync::Arc;

use tracing::info;

use docflow_core::error::AppError;
use docflow_core::types::CategoryId;
use docflow_database::repositories::CategoryRepository;
use docflow_entity::category::Category;

use crate::context::RequestContext;

/// Manages a user's categories.
///
/// Deleting a category does not touch documents that reference it.
#[derive(Debug, Clone)]
pub struct CategoryService {
    categories: Arc<CategoryRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(categories: Arc<CategoryRepository>) -> Self {
        Self { categories }
    }

    /// Create a category. Names need not be unique.
    pub async fn create(&self, ctx: &RequestContext, name: &str) -> Result<Category, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Category name is required"));
        }

        let category = Category::new(ctx.user_id, name);
        self.categories.create(&category).await?;

        info!(user_id = %ctx.user_id, username = %ctx.username, category_id = %category.id, "Category created");
        Ok(category)
    }

    /// The acting user's categories, oldest first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Category>, AppError> {
        self.categories.find_by_owner(ctx.user_id).await
    }

    /// Delete one of the acting user's categories.
    pub async fn delete(&self, ctx: &RequestContext, id: CategoryId) -> Result<(), AppError> {
        if !self.categories.delete(ctx.user_id, id).await? {
            return Err(AppError::not_found("Category not found"));
        }
        info!(user_id = %ctx.user_id, username = %ctx.username, category_id = %id, "Category deleted");
        Ok(())
    }
}
