//! Storage provider trait for uploaded file content.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// Metadata about a stored object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageObjectMeta {
    /// Size in bytes.
    pub size_bytes: u64,
}

/// An owned byte stream returned when reading file contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// A byte stream that may borrow its source (e.g. a request body field).
pub type WriteStream<'a> = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send + 'a>>;

/// Trait for file storage backends.
///
/// Paths are relative to the provider's root. The [`StorageProvider`]
/// trait is defined here and implemented in `docflow-storage`.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Open a file and return its byte stream. Fails with `NotFound` if absent.
    async fn read(&self, path: &str) -> AppResult<ByteStream>;

    /// Create a new file at `path` and copy `stream` into it.
    ///
    /// Fails if a file already exists at `path`. Returns the number of
    /// bytes written.
    async fn write_stream(&self, path: &str, stream: WriteStream<'_>) -> AppResult<u64>;

    /// Delete a file. Deleting a missing file is not an error.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether a file exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// Stat a file. Fails with `NotFound` if absent.
    async fn metadata(&self, path: &str) -> AppResult<StorageObjectMeta>;
}
