mod error;
mod functions;
mod traits;
mod types;

pub use error::AuthError;
pub use functions::{is_session_expired, resolve_organizer, LEGACY_ORGANIZER_ID};
pub use traits::{Result, SessionProvider};
pub use types::{OrganizerId, OrganizerSource, Session};
