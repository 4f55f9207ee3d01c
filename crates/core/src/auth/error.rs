use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid organizer id: {0}")]
    InvalidOrganizerId(String),

    #[error("session provider error: {0}")]
    Provider(String),
}
