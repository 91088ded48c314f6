//! Category registry.

pub mod service;

pub use service::CategoryService;
