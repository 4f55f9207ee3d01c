//! Session providers for the terminal client.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use evently_core::auth::{Result, Session, SessionProvider};

/// How long a session built from a bare user id stays valid.
const STATIC_SESSION_TTL_HOURS: i64 = 24;

/// Session provider holding a fixed session (or none).
///
/// The CLI has no sign-in flow; the signed-in user is given on the command
/// line or through `EVENTLY_SESSION_USER`.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionProvider {
    session: Option<Session>,
}

impl StaticSessionProvider {
    /// A provider with nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(session: Option<Session>) -> Self {
        Self { session }
    }

    /// Build a session for `user_id`, valid for the next 24 hours.
    pub fn for_user(user_id: Option<Uuid>) -> Self {
        let session = user_id.map(|user_id| Session {
            user_id,
            expires_at: Utc::now() + Duration::hours(STATIC_SESSION_TTL_HOURS),
        });
        Self { session }
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.session.clone())
    }
}
