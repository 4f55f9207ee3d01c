//! Form controller for creating an event.
//!
//! Owns the draft, runs validation on submit, sends the derived request and
//! keeps the single status line plus per-field errors for display.

use chrono::Utc;
use thiserror::Error;

use evently_core::auth::{resolve_organizer, OrganizerId, OrganizerSource, SessionProvider};
use evently_core::event::{
    self, EventCreateRequest, EventDraft, Field, Locale, StatusMessage, ValidEvent,
    ValidationErrors,
};

use crate::client::EventsApi;
use crate::config::{legacy_organizer, Config};
use crate::error::ClientError;

/// Why [`FormController::submit`] did not create an event.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Failed(#[from] ClientError),
}

/// Event creation form.
pub struct FormController<A, S> {
    api: A,
    sessions: S,
    locale: Locale,
    fallback_organizer: OrganizerId,
    draft: EventDraft,
    field_errors: ValidationErrors,
    status: Option<StatusMessage>,
}

impl<A, S> FormController<A, S>
where
    A: EventsApi,
    S: SessionProvider,
{
    /// Create a form with an empty draft.
    pub fn new(api: A, sessions: S) -> Self {
        Self {
            api,
            sessions,
            locale: Locale::default(),
            fallback_organizer: legacy_organizer(),
            draft: EventDraft::new(),
            field_errors: ValidationErrors::new(),
            status: None,
        }
    }

    /// Apply locale and fallback organizer from configuration.
    pub fn with_config(self, config: &Config) -> Self {
        self.with_locale(config.locale)
            .with_fallback_organizer(config.fallback_organizer)
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Organizer used when no live session is available.
    pub fn with_fallback_organizer(mut self, organizer: OrganizerId) -> Self {
        self.fallback_organizer = organizer;
        self
    }

    /// Start from an already filled draft.
    pub fn with_draft(mut self, draft: EventDraft) -> Self {
        self.draft = draft;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn set_eventname(&mut self, value: impl Into<String>) {
        self.draft.set_eventname(value);
    }

    pub fn set_local(&mut self, value: impl Into<String>) {
        self.draft.set_local(value);
    }

    pub fn set_date(&mut self, value: impl Into<String>) {
        self.draft.set_date(value);
    }

    pub fn clear_date(&mut self) {
        self.draft.clear_date();
    }

    pub fn set_hour(&mut self, value: impl Into<String>) {
        self.draft.set_hour(value);
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.set_description(value);
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Validate the current draft without touching displayed state.
    pub fn validate(&self) -> Result<ValidEvent, ValidationErrors> {
        event::validate(&self.draft)
    }

    /// Field errors from the latest submit attempt.
    pub fn field_errors(&self) -> &ValidationErrors {
        &self.field_errors
    }

    /// Localized inline error for one field, if it failed.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.field_errors
            .get(field)
            .map(|error| error.localized(self.locale))
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// The status line as shown to the user.
    pub fn status_line(&self) -> Option<String> {
        self.status.as_ref().map(|status| status.render(self.locale))
    }

    /// Validate and submit the draft.
    ///
    /// Validation failures are stored as field errors and nothing is sent.
    /// Otherwise exactly one request is made and its outcome replaces the
    /// status line. The draft is kept either way.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let valid = match self.validate() {
            Ok(valid) => valid,
            Err(errors) => {
                tracing::debug!(fields = ?errors.fields(), "Draft failed validation");
                self.field_errors = errors.clone();
                return Err(SubmitError::Validation(errors));
            }
        };
        self.field_errors = ValidationErrors::new();

        match self.send(valid).await {
            Ok(()) => {
                tracing::info!("Event created");
                self.status = Some(StatusMessage::Created);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Event creation failed");
                self.status = Some(StatusMessage::from_outcome(Err(err.to_failure())));
                Err(SubmitError::Failed(err))
            }
        }
    }

    /// The request that `submit` would send right now.
    pub async fn preview(&self) -> Result<EventCreateRequest, SubmitError> {
        let valid = self.validate().map_err(SubmitError::Validation)?;
        Ok(self.build_request(valid).await?)
    }

    async fn send(&self, valid: ValidEvent) -> Result<(), ClientError> {
        let req = self.build_request(valid).await?;
        self.api.create_event(&req).await
    }

    async fn build_request(&self, valid: ValidEvent) -> Result<EventCreateRequest, ClientError> {
        let session = self.sessions.current_session().await?;
        let (organizer_id, source) =
            resolve_organizer(session.as_ref(), self.fallback_organizer, Utc::now());
        if source == OrganizerSource::Fallback {
            tracing::warn!(
                organizer_id = %organizer_id,
                "No signed-in user, using fallback organizer"
            );
        }
        Ok(EventCreateRequest::new(valid, organizer_id))
    }
}
