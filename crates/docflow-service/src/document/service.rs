//! Document registry operations scoped to the acting user.

use std::sync::Arc;

use tracing::{info, warn};

use docflow_core::error::AppError;
use docflow_core::traits::storage::{ByteStream, WriteStream};
use docflow_core::types::{CategoryId, DocumentId};
use docflow_database::repositories::DocumentRepository;
use docflow_entity::document::{CreateDocument, Document, UpdateDocument, parse_tags};
use docflow_storage::{FileStore, StoredFile};

use super::search::{DocumentQuery, matches_search};
use crate::context::RequestContext;

/// Content type recorded when the client does not send one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Metadata for a document whose content is already stored.
#[derive(Debug, Clone)]
pub struct NewDocument {
    /// Title.
    pub title: String,
    /// Original client file name.
    pub file_name: String,
    /// MIME type.
    pub file_type: String,
    /// Stored size in bytes.
    pub file_size: u64,
    /// Storage locator.
    pub file_path: String,
    /// Optional category.
    pub category_id: Option<CategoryId>,
    /// Comma-separated tags, if any.
    pub tags: Option<String>,
}

/// Fields gathered from an upload request after the file was saved.
#[derive(Debug, Clone)]
pub struct Upload {
    /// The saved content.
    pub stored: StoredFile,
    /// Original client file name.
    pub file_name: String,
    /// Client-declared content type.
    pub file_type: Option<String>,
    /// Title, which is required.
    pub title: Option<String>,
    /// Optional category.
    pub category_id: Option<CategoryId>,
    /// Comma-separated tags.
    pub tags: Option<String>,
}

/// A readable document body and the headers to send with it.
pub struct Download {
    /// File content.
    pub stream: ByteStream,
    /// Suggested file name.
    pub file_name: String,
    /// MIME type.
    pub file_type: String,
    /// Size recorded at upload.
    pub file_size: u64,
}

impl std::fmt::Debug for Download {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Download")
            .field("file_name", &self.file_name)
            .field("file_type", &self.file_type)
            .field("file_size", &self.file_size)
            .finish_non_exhaustive()
    }
}

/// Document registry.
///
/// Every lookup is filtered by the actor's id. A document owned by
/// someone else is reported exactly like a missing one.
#[derive(Debug, Clone)]
pub struct DocumentService {
    documents: Arc<DocumentRepository>,
    files: Arc<FileStore>,
}

fn not_found() -> AppError {
    AppError::not_found("Document not found")
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(documents: Arc<DocumentRepository>, files: Arc<FileStore>) -> Self {
        Self { documents, files }
    }

    /// Stream upload content into the file store.
    pub async fn save_content(
        &self,
        stream: WriteStream<'_>,
        file_name: &str,
    ) -> Result<StoredFile, AppError> {
        self.files.save(stream, file_name).await
    }

    /// Record metadata for saved upload content.
    ///
    /// If the title is missing or the record cannot be written, the
    /// saved file is removed again.
    pub async fn finish_upload(
        &self,
        ctx: &RequestContext,
        upload: Upload,
    ) -> Result<Document, AppError> {
        let locator = upload.stored.locator.clone();

        let Some(title) = upload.title.filter(|t| !t.trim().is_empty()) else {
            self.discard_content(&locator).await;
            return Err(AppError::validation("title is required"));
        };

        let new = NewDocument {
            title,
            file_name: upload.file_name,
            file_type: upload
                .file_type
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            file_size: upload.stored.size,
            file_path: upload.stored.locator,
            category_id: upload.category_id,
            tags: upload.tags,
        };

        match self.create(ctx, new).await {
            Ok(document) => Ok(document),
            Err(e) => {
                self.discard_content(&locator).await;
                Err(e)
            }
        }
    }

    /// Create a document record for already stored content.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        new: NewDocument,
    ) -> Result<Document, AppError> {
        let document = Document::new(
            ctx.user_id,
            CreateDocument {
                title: new.title,
                file_name: new.file_name,
                file_type: new.file_type,
                file_size: new.file_size,
                file_path: new.file_path,
                category_id: new.category_id,
                tags: new.tags.as_deref().map(parse_tags).unwrap_or_default(),
            },
        );
        self.documents.create(&document).await?;

        info!(
            user_id = %ctx.user_id,
            username = %ctx.username,
            document_id = %document.id,
            size = document.file_size,
            "Document uploaded"
        );
        Ok(document)
    }

    /// The actor's documents matching `query`, in upload order.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        query: &DocumentQuery,
    ) -> Result<Vec<Document>, AppError> {
        let documents = self
            .documents
            .find_by_owner(ctx.user_id, query.category_id)
            .await?;

        Ok(match query.needle() {
            Some(needle) => documents
                .into_iter()
                .filter(|d| matches_search(d, &needle))
                .collect(),
            None => documents,
        })
    }

    /// One of the actor's documents.
    pub async fn get(&self, ctx: &RequestContext, id: DocumentId) -> Result<Document, AppError> {
        self.documents
            .find_owned(ctx.user_id, id)
            .await?
            .ok_or_else(not_found)
    }

    /// Apply a partial update and return the updated document.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: DocumentId,
        update: &UpdateDocument,
    ) -> Result<Document, AppError> {
        let mut document = self.get(ctx, id).await?;
        if update.is_empty() {
            return Ok(document);
        }

        if !self.documents.update(ctx.user_id, id, update).await? {
            return Err(not_found());
        }
        document.apply(update);

        info!(user_id = %ctx.user_id, username = %ctx.username, document_id = %id, "Document updated");
        Ok(document)
    }

    /// Delete the record and its stored file.
    ///
    /// A file that cannot be removed is logged and otherwise ignored.
    pub async fn delete(&self, ctx: &RequestContext, id: DocumentId) -> Result<(), AppError> {
        let document = self.get(ctx, id).await?;

        if let Err(e) = self.files.delete(&document.file_path).await {
            warn!(
                document_id = %id,
                locator = %document.file_path,
                error = %e,
                "Failed to remove stored file"
            );
        }

        if !self.documents.delete(ctx.user_id, id).await? {
            return Err(not_found());
        }

        info!(user_id = %ctx.user_id, username = %ctx.username, document_id = %id, "Document deleted");
        Ok(())
    }

    /// Open a document's content for streaming.
    pub async fn download(&self, ctx: &RequestContext, id: DocumentId) -> Result<Download, AppError> {
        let document = self.get(ctx, id).await?;
        let stream = self.files.open(&document.file_path).await.map_err(|e| {
            if e.kind == docflow_core::ErrorKind::NotFound {
                AppError::not_found("File not found")
            } else {
                e
            }
        })?;

        Ok(Download {
            stream,
            file_name: document.file_name,
            file_type: document.file_type,
            file_size: document.file_size,
        })
    }

    /// Remove saved upload content that will not get a record.
    pub async fn discard_content(&self, locator: &str) {
        if let Err(e) = self.files.delete(locator).await {
            warn!(%locator, error = %e, "Failed to remove orphaned upload");
        }
    }
}
