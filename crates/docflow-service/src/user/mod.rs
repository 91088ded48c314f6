//! Account registration, login, and profile lookup.

pub mod service;

pub use service::{AuthSession, LoginRequest, RegisterRequest, UserService};
