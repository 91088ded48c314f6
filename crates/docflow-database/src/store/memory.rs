//! In-process record store.
//!
//! Records live in insertion order per collection behind a single
//! `RwLock`, so every write is atomic with respect to readers. Used for
//! tests and single-process development runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use docflow_core::error::AppError;
use docflow_core::result::AppResult;
use docflow_core::traits::RecordStore;
use docflow_core::types::Record;
use docflow_core::types::record::matches;

use super::unique_fields;

/// A [`RecordStore`] backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    collections: RwLock<HashMap<String, Vec<Record>>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_unique(collection: &str, existing: &[Record], candidate: &Record) -> AppResult<()> {
    for field in unique_fields(collection) {
        let Some(value) = candidate.get(*field) else {
            continue;
        };
        if existing.iter().any(|r| r.get(*field) == Some(value)) {
            return Err(AppError::conflict(format!(
                "Duplicate value for unique field '{field}' in {collection}"
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn find_one(&self, collection: &str, filter: &Record) -> AppResult<Option<Record>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|records| records.iter().find(|r| matches(r, filter)))
            .cloned())
    }

    async fn find(&self, collection: &str, filter: &Record) -> AppResult<Vec<Record>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| matches(r, filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert_one(&self, collection: &str, record: Record) -> AppResult<()> {
        let mut collections = self.collections.write().await;
        let records = collections.entry(collection.to_string()).or_default();
        check_unique(collection, records, &record)?;
        records.push(record);
        Ok(())
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Record,
        changes: Record,
    ) -> AppResult<u64> {
        let mut collections = self.collections.write().await;
        let Some(records) = collections.get_mut(collection) else {
            return Ok(0);
        };
        let Some(target) = records.iter_mut().find(|r| matches(r, filter)) else {
            return Ok(0);
        };
        target.extend(changes);
        Ok(1)
    }

    async fn delete_one(&self, collection: &str, filter: &Record) -> AppResult<u64> {
        let mut collections = self.collections.write().await;
        let Some(records) = collections.get_mut(collection) else {
            return Ok(0);
        };
        match records.iter().position(|r| matches(r, filter)) {
            Some(index) => {
                records.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
