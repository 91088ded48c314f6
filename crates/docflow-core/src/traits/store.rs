//! Durable record store trait.
//!
//! The store is a collection-oriented document database: every collection
//! holds flat [`Record`]s, filters are equality maps, and a record matches
//! a filter when every filter key is present with an equal value.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::record::Record;

/// Collection-style persistence used by every repository.
///
/// Implementations must make single-record writes atomic. Nothing else
/// (cross-record transactions, ordering between collections) is required.
#[async_trait]
pub trait RecordStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend name (e.g. `"postgres"`, `"memory"`).
    fn backend(&self) -> &str;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Release connections. Called once at shutdown.
    async fn close(&self) {}

    /// Return the first record in `collection` matching `filter`.
    async fn find_one(&self, collection: &str, filter: &Record) -> AppResult<Option<Record>>;

    /// Return every record in `collection` matching `filter`, in insertion order.
    async fn find(&self, collection: &str, filter: &Record) -> AppResult<Vec<Record>>;

    /// Insert a new record.
    async fn insert_one(&self, collection: &str, record: Record) -> AppResult<()>;

    /// Merge `changes` into the first record matching `filter`.
    /// Returns the number of records modified (0 or 1).
    async fn update_one(&self, collection: &str, filter: &Record, changes: Record)
    -> AppResult<u64>;

    /// Delete the first record matching `filter`.
    /// Returns the number of records deleted (0 or 1).
    async fn delete_one(&self, collection: &str, filter: &Record) -> AppResult<u64>;
}
