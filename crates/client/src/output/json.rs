//! JSON output formatting.

use evently_core::event::{Locale, StatusMessage, ValidationErrors};

use crate::error::Result;

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Field errors as a `{ field: message }` object.
pub fn format_field_errors(errors: &ValidationErrors, locale: Locale) -> String {
    let map: serde_json::Map<String, serde_json::Value> = errors
        .iter()
        .map(|error| {
            (
                error.field().name().to_string(),
                serde_json::Value::from(error.localized(locale)),
            )
        })
        .collect();
    serde_json::json!({ "errors": map }).to_string()
}

/// Status as JSON, including the rendered line.
pub fn format_status(status: &StatusMessage, locale: Locale) -> String {
    serde_json::json!({
        "success": status.is_success(),
        "message": status.render(locale),
        "outcome": status,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use evently_core::event::{validate, EventDraft, Field};

    #[test]
    fn test_format_field_errors() {
        let draft = EventDraft::new()
            .with(Field::Eventname, "Meetup")
            .with(Field::Local, "Downtown Hall")
            .with(Field::Hour, "18:00");
        let errors = validate(&draft).unwrap_err();

        let value: serde_json::Value =
            serde_json::from_str(&format_field_errors(&errors, Locale::En)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "errors": { "description": "Description must be at least 10 characters" }
            })
        );
    }

    #[test]
    fn test_format_status() {
        let value: serde_json::Value =
            serde_json::from_str(&format_status(&StatusMessage::Created, Locale::PtBr)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Evento criado com sucesso!");
    }
}
