use chrono::{DateTime, Utc};

use super::{OrganizerId, OrganizerSource, Session};

/// Organizer id historically hard-coded into every request.
///
/// Only used as the default fallback when no session is available.
pub const LEGACY_ORGANIZER_ID: &str = "b0745f32-0bbb-4674-ba6e-8b0e1d5f9294";

/// Check if a session has expired.
pub fn is_session_expired(session: &Session, now: DateTime<Utc>) -> bool {
    session.expires_at <= now
}

/// Pick the organizer for a new event.
///
/// A live session wins. A missing or expired session falls back to
/// `fallback`.
pub fn resolve_organizer(
    session: Option<&Session>,
    fallback: OrganizerId,
    now: DateTime<Utc>,
) -> (OrganizerId, OrganizerSource) {
    match session {
        Some(session) if !is_session_expired(session, now) => {
            (OrganizerId::new(session.user_id), OrganizerSource::Session)
        }
        _ => (fallback, OrganizerSource::Fallback),
    }
}
