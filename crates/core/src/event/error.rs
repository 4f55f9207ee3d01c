use thiserror::Error;

use super::messages::Locale;
use super::types::Field;

/// A single field constraint failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} must be at least {min} characters")]
    TooShort { field: Field, min: usize },
    #[error("{0:?} is not a valid date")]
    InvalidDate(String),
}

impl FieldError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldError::TooShort { field, .. } => *field,
            FieldError::InvalidDate(_) => Field::Date,
        }
    }

    /// User-facing message in the given locale.
    pub fn localized(&self, locale: Locale) -> &'static str {
        let messages = locale.messages();
        match self.field() {
            Field::Eventname => messages.eventname_too_short,
            Field::Local => messages.local_too_short,
            Field::Date => messages.invalid_date,
            Field::Hour => messages.hour_too_short,
            Field::Description => messages.description_too_short,
        }
    }
}

/// Every field error found in one validation pass, in field order.
#[derive(Debug, Error, Clone, Default, PartialEq, Eq)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. At most one error is kept per field.
    pub fn push(&mut self, error: FieldError) {
        let field = error.field();
        match self.errors.iter().position(|e| e.field() >= field) {
            Some(pos) if self.errors[pos].field() == field => self.errors[pos] = error,
            Some(pos) => self.errors.insert(pos, error),
            None => self.errors.push(error),
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Fields that failed, in display order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(FieldError::field).collect()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.push(error);
        }
        errors
    }
}
