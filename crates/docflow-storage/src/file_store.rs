//! Uploaded file naming and lifecycle.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use docflow_core::config::StorageConfig;
use docflow_core::result::AppResult;
use docflow_core::traits::storage::{ByteStream, StorageProvider, WriteStream};

use crate::providers::local::LocalStorageProvider;

/// Result of saving an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Opaque locator to persist alongside the document.
    pub locator: String,
    /// Size of the stored file in bytes.
    pub size: u64,
}

/// Saves uploads under fresh unique names and hands them back by locator.
///
/// The stored name is a random UUID followed by the client file name's
/// extension, so two uploads with the same original name never collide.
#[derive(Debug, Clone)]
pub struct FileStore {
    provider: Arc<dyn StorageProvider>,
}

impl FileStore {
    /// Wrap an existing provider.
    pub fn new(provider: Arc<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    /// Open a local file store from configuration, creating the upload directory.
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let provider = LocalStorageProvider::new(&config.upload_dir).await?;
        info!(upload_dir = %config.upload_dir, "File store ready");
        Ok(Self::new(Arc::new(provider)))
    }

    /// The underlying provider.
    pub fn provider(&self) -> &dyn StorageProvider {
        self.provider.as_ref()
    }

    /// Copy `stream` into a new uniquely named file.
    ///
    /// If the copy fails midway the partially written file is left behind
    /// and the error is returned. The reported size is read back from the
    /// stored file.
    pub async fn save(&self, stream: WriteStream<'_>, original_name: &str) -> AppResult<StoredFile> {
        let locator = unique_name(original_name);
        let written = self.provider.write_stream(&locator, stream).await?;
        let size = self.provider.metadata(&locator).await?.size_bytes;
        debug!(%locator, written, size, "Saved upload");
        Ok(StoredFile { locator, size })
    }

    /// Stream the content behind `locator`. `NotFound` if it is gone.
    pub async fn open(&self, locator: &str) -> AppResult<ByteStream> {
        self.provider.read(locator).await
    }

    /// Remove the content behind `locator`. Missing files are ignored.
    pub async fn delete(&self, locator: &str) -> AppResult<()> {
        if !self.provider.exists(locator).await? {
            debug!(%locator, "Stored file already absent");
            return Ok(());
        }
        self.provider.delete(locator).await
    }
}

/// A fresh random name carrying over the extension of `original_name`.
fn unique_name(original_name: &str) -> String {
    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    match extension {
        Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
        None => Uuid::new_v4().to_string(),
    }
}
