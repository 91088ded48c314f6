//! # docflow-service
//!
//! Use cases for DocFlow: account registration and login, the category
//! registry, and the document registry with search. Every registry
//! operation takes the [`RequestContext`] of the authenticated actor and
//! only ever touches that actor's records.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod category;
pub mod context;
pub mod document;
pub mod user;

pub use category::CategoryService;
pub use context::RequestContext;
pub use document::{DocumentQuery, DocumentService};
pub use user::{AuthSession, UserService};
