use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthError;

/// Identity reference attached to a created event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizerId(Uuid);

impl OrganizerId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrganizerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrganizerId {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| AuthError::InvalidOrganizerId(s.to_string()))
    }
}

impl From<Uuid> for OrganizerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// Authenticated user session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

/// Where the organizer id of a request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizerSource {
    /// The signed-in user.
    Session,
    /// No usable session; the configured fallback id was used.
    Fallback,
}
