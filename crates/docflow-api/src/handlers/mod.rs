//! Request handlers, one module per route group.

pub mod auth;
pub mod category;
pub mod document;
pub mod health;

use std::str::FromStr;

use docflow_core::error::AppError;

/// Parse a path identifier. Anything unparseable cannot exist, so it is `NotFound`.
pub(crate) fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found(format!("{what} not found")))
}
