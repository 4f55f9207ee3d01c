use async_trait::async_trait;

use super::{AuthError, Session};

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Read-only access to the authenticated session.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The current session, or `None` when nobody is signed in.
    async fn current_session(&self) -> Result<Option<Session>>;
}
