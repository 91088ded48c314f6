//! # docflow-storage
//!
//! Content storage for uploaded documents: a local filesystem
//! [`StorageProvider`](docflow_core::traits::StorageProvider) and the
//! [`FileStore`] that names, saves, opens and removes uploaded files.

pub mod file_store;
pub mod providers;

pub use file_store::{FileStore, StoredFile};
pub use providers::local::LocalStorageProvider;
