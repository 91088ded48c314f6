//! Core traits defined in `docflow-core` and implemented by other crates.

pub mod storage;
pub mod store;

pub use storage::StorageProvider;
pub use store::RecordStore;
