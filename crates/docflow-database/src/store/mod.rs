//! Record store implementations and the provider factory.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use tracing::info;

use docflow_core::config::DatabaseConfig;
use docflow_core::error::AppError;
use docflow_core::result::AppResult;
use docflow_core::traits::RecordStore;

pub use memory::MemoryRecordStore;
pub use postgres::PgRecordStore;

/// Fields that must be unique within a collection.
///
/// Mirrors the unique indexes in the `records` migration so that both
/// backends reject the same duplicates.
pub fn unique_fields(collection: &str) -> &'static [&'static str] {
    match collection {
        "users" => &["id", "email", "username"],
        _ => &["id"],
    }
}

/// Open the record store selected by `config.provider`.
///
/// The PostgreSQL backend applies pending migrations while connecting.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match config.provider.as_str() {
        "postgres" => {
            info!("Initializing PostgreSQL record store");
            Arc::new(PgRecordStore::connect(config).await?)
        }
        "memory" => {
            info!("Initializing in-memory record store");
            Arc::new(MemoryRecordStore::new())
        }
        other => {
            return Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            )));
        }
    };

    Ok(store)
}
