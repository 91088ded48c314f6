//! # docflow-database
//!
//! Durable record store implementations (PostgreSQL and in-memory) and
//! the typed repositories that map DocFlow entities onto store records.

pub mod repositories;
pub mod store;

pub use store::{MemoryRecordStore, PgRecordStore, open_store};
