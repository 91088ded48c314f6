//! # docflow-auth
//!
//! Credential hashing, signed session tokens, and the access-control
//! step that turns a bearer token into the acting [`User`](docflow_entity::User).

pub mod access;
pub mod jwt;
pub mod password;

pub use access::AccessControl;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
