//! # docflow-core
//!
//! Core crate for DocFlow. Contains the error taxonomy, configuration
//! schemas, typed identifiers, the flat record type, and the two storage
//! seams (`RecordStore` for metadata, `StorageProvider` for file content).
//!
//! This crate has **no** internal dependencies on other DocFlow crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
