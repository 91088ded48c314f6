//! Mapping between typed entities and the store's flat record format.
//!
//! Entities serialize field-for-field; identifiers become strings and
//! `DateTime<Utc>` fields become RFC 3339 (ISO-8601) strings, which is the
//! store's datetime convention.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use docflow_core::error::AppError;
use docflow_core::result::AppResult;
use docflow_core::types::Record;

/// An entity persisted as one record in a named collection.
pub trait StoredEntity: Serialize + DeserializeOwned + Sized {
    /// Name of the collection holding this entity.
    const COLLECTION: &'static str;

    /// Serialize into a flat record.
    fn to_record(&self) -> AppResult<Record> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(AppError::internal(format!(
                "{} did not serialize to an object: {other}",
                Self::COLLECTION
            ))),
        }
    }

    /// Parse a record read back from the store.
    fn from_record(record: Record) -> AppResult<Self> {
        serde_json::from_value(Value::Object(record)).map_err(|e| {
            AppError::with_source(
                docflow_core::ErrorKind::Serialization,
                format!("Malformed {} record: {e}", Self::COLLECTION),
                e,
            )
        })
    }
}
