//! # docflow-api
//!
//! HTTP API layer for DocFlow built on Axum.
//!
//! Provides the REST endpoints under `/api`, the bearer-token extractor,
//! request/response DTOs, request logging, and the mapping from
//! [`AppError`](docflow_core::AppError) to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
