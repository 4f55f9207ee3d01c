//! Per-field validation rules, combined into one aggregate check.
//!
//! Every rule is a pure function of the field's text. [`validate`] runs all of
//! them independently, so a draft with several bad fields reports all of them
//! at once.

use chrono::NaiveDate;

use super::error::{FieldError, ValidationErrors};
use super::types::{EventDraft, Field, ValidEvent};

pub const EVENTNAME_MIN_LEN: usize = 2;
pub const LOCAL_MIN_LEN: usize = 2;
pub const HOUR_MIN_LEN: usize = 4;
pub const DESCRIPTION_MIN_LEN: usize = 10;

/// Accepted date layout (the value a date picker produces).
const DATE_FORMAT: &str = "%Y-%m-%d";

fn min_len(field: Field, value: &str, min: usize) -> Result<(), FieldError> {
    if value.chars().count() < min {
        return Err(FieldError::TooShort { field, min });
    }
    Ok(())
}

pub fn validate_eventname(value: &str) -> Result<(), FieldError> {
    min_len(Field::Eventname, value, EVENTNAME_MIN_LEN)
}

pub fn validate_local(value: &str) -> Result<(), FieldError> {
    min_len(Field::Local, value, LOCAL_MIN_LEN)
}

/// Only the length is checked; "HH:MM" is the expected shape.
pub fn validate_hour(value: &str) -> Result<(), FieldError> {
    min_len(Field::Hour, value, HOUR_MIN_LEN)
}

pub fn validate_description(value: &str) -> Result<(), FieldError> {
    min_len(Field::Description, value, DESCRIPTION_MIN_LEN)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// An absent date is valid. A present one must be a real calendar date.
pub fn validate_date(value: Option<&str>) -> Result<Option<NaiveDate>, FieldError> {
    match value {
        None => Ok(None),
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| FieldError::InvalidDate(raw.to_string())),
    }
}

/// Validate every field of a draft.
///
/// Returns the validated event, or all field errors in field order.
pub fn validate(draft: &EventDraft) -> Result<ValidEvent, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for result in [
        validate_eventname(draft.eventname()),
        validate_local(draft.local()),
        validate_hour(draft.hour()),
        validate_description(draft.description()),
    ] {
        if let Err(error) = result {
            errors.push(error);
        }
    }

    let date = validate_date(draft.date()).unwrap_or_else(|error| {
        errors.push(error);
        None
    });

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidEvent::new(
        draft.eventname().to_string(),
        draft.local().to_string(),
        date,
        draft.hour().to_string(),
        draft.description().to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meetup_draft() -> EventDraft {
        EventDraft::new()
            .with(Field::Eventname, "Meetup")
            .with(Field::Local, "Downtown Hall")
            .with(Field::Date, "2024-06-15")
            .with(Field::Hour, "18:00")
            .with(Field::Description, "Monthly community meetup")
    }

    #[test]
    fn test_validate_success() {
        let event = validate(&meetup_draft()).unwrap();
        assert_eq!(event.title(), "Meetup");
        assert_eq!(event.location(), "Downtown Hall");
        assert_eq!(event.date(), NaiveDate::from_ymd_opt(2024, 6, 15));
        assert_eq!(event.hour(), "18:00");
    }

    #[test]
    fn test_short_eventname_rejected() {
        for name in ["", "M"] {
            let draft = meetup_draft().with(Field::Eventname, name);
            let errors = validate(&draft).unwrap_err();
            assert_eq!(
                errors.get(Field::Eventname),
                Some(&FieldError::TooShort {
                    field: Field::Eventname,
                    min: 2
                })
            );
        }
    }

    #[test]
    fn test_short_local_rejected() {
        let draft = meetup_draft().with(Field::Local, "X");
        assert_eq!(validate(&draft).unwrap_err().fields(), vec![Field::Local]);
    }

    #[test]
    fn test_short_hour_rejected() {
        let draft = meetup_draft().with(Field::Hour, "6pm");
        assert_eq!(validate(&draft).unwrap_err().fields(), vec![Field::Hour]);
    }

    #[test]
    fn test_hour_shape_not_parsed() {
        let draft = meetup_draft().with(Field::Hour, "late evening");
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn test_short_description_rejected() {
        let draft = meetup_draft().with(Field::Description, "Too short");
        assert_eq!(
            validate(&draft).unwrap_err().fields(),
            vec![Field::Description]
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // Two characters, four bytes.
        assert!(validate_eventname("çã").is_ok());
        assert!(validate_eventname("ç").is_err());
    }

    #[test]
    fn test_absent_date_accepted() {
        let mut draft = meetup_draft();
        draft.clear_date();
        let event = validate(&draft).unwrap();
        assert_eq!(event.date(), None);
    }

    #[test]
    fn test_invalid_date_rejected() {
        for raw in ["2024-02-30", "tomorrow", "15-06-2024"] {
            let draft = meetup_draft().with(Field::Date, raw);
            let errors = validate(&draft).unwrap_err();
            assert_eq!(
                errors.get(Field::Date),
                Some(&FieldError::InvalidDate(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_only_iso_dates_accepted() {
        assert_eq!(
            validate_date(Some("2024-06-15")),
            Ok(NaiveDate::from_ymd_opt(2024, 6, 15))
        );
        assert_eq!(
            validate_date(Some("15/06/2024")),
            Err(FieldError::InvalidDate("15/06/2024".to_string()))
        );
    }

    #[test]
    fn test_all_errors_surface_together() {
        let errors = validate(&EventDraft::new().with(Field::Date, "nope")).unwrap_err();
        assert_eq!(errors.fields(), Field::ALL.to_vec());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let good = meetup_draft();
        assert_eq!(validate(&good), validate(&good));

        let bad = EventDraft::new().with(Field::Eventname, "x");
        assert_eq!(validate(&bad), validate(&bad));
    }
}
