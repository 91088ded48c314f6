//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use docflow_auth::{AccessControl, JwtDecoder, JwtEncoder, PasswordHasher};
use docflow_core::config::AppConfig;
use docflow_core::error::AppError;
use docflow_core::traits::RecordStore;
use docflow_database::repositories::{CategoryRepository, DocumentRepository, UserRepository};
use docflow_service::{CategoryService, DocumentService, UserService};
use docflow_storage::FileStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Durable record store.
    pub store: Arc<dyn RecordStore>,
    /// Uploaded file content.
    pub files: Arc<FileStore>,
    /// Bearer token resolution.
    pub access: Arc<AccessControl>,
    /// Registration, login, profile.
    pub user_service: Arc<UserService>,
    /// Category registry.
    pub category_service: Arc<CategoryService>,
    /// Document registry.
    pub document_service: Arc<DocumentService>,
}

impl AppState {
    /// Wire repositories, auth, and services over an open store and file store.
    pub fn new(
        config: AppConfig,
        store: Arc<dyn RecordStore>,
        files: FileStore,
    ) -> Result<Self, AppError> {
        let files = Arc::new(files);

        let user_repo = Arc::new(UserRepository::new(store.clone()));
        let category_repo = Arc::new(CategoryRepository::new(store.clone()));
        let document_repo = Arc::new(DocumentRepository::new(store.clone()));

        let encoder = Arc::new(JwtEncoder::new(&config.auth)?);
        let decoder = JwtDecoder::new(&config.auth);
        let hasher = Arc::new(PasswordHasher::new());
        let access = Arc::new(AccessControl::new(decoder, user_repo.as_ref().clone()));

        Ok(Self {
            user_service: Arc::new(UserService::new(user_repo, hasher, encoder)),
            category_service: Arc::new(CategoryService::new(category_repo)),
            document_service: Arc::new(DocumentService::new(document_repo, files.clone())),
            config: Arc::new(config),
            store,
            files,
            access,
        })
    }
}
