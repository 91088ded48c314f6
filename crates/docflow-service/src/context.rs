//! Request context carrying the authenticated actor.

use docflow_core::types::UserId;
use docflow_entity::user::User;

/// Context for the current authenticated request.
///
/// Built from the user resolved by access control and passed into
/// every registry call so that each operation knows who is acting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// The authenticated user's ID. Every registry filter scopes by it.
    pub user_id: UserId,
    /// The authenticated user's name, for log lines.
    pub username: String,
}

impl RequestContext {
    /// Creates a context for `user`.
    pub fn new(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
        }
    }
}

impl From<&User> for RequestContext {
    fn from(user: &User) -> Self {
        Self::new(user)
    }
}
