//! # docflow-entity
//!
//! Domain entity models for DocFlow. Every struct in this crate is either
//! a stored entity (persisted as a flat record in one collection) or an
//! input value object used to create or patch one.

pub mod category;
pub mod document;
pub mod record;
pub mod user;

pub use category::Category;
pub use document::{CreateDocument, Document, UpdateDocument};
pub use record::StoredEntity;
pub use user::User;
