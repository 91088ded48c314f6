//! Core type definitions used across the DocFlow workspace.

pub mod id;
pub mod record;

pub use id::*;
pub use record::Record;
