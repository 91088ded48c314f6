//! Typed repositories over the record store.
//!
//! Each repository owns one collection and translates between entities
//! and flat records. Ownership scoping is expressed as an extra
//! `user_id` equality in every filter.

pub mod category;
pub mod document;
pub mod user;

pub use category::CategoryRepository;
pub use document::DocumentRepository;
pub use user::UserRepository;
