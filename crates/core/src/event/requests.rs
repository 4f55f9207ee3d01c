//! Wire types for the event creation endpoint.
//!
//! Pure data types shared by the form controller and the HTTP client.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::ValidEvent;
use crate::auth::OrganizerId;

/// Payload for `POST /events`.
///
/// `date` is sent as a UTC midnight timestamp, or `null` when the draft had no
/// date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreateRequest {
    pub location: String,
    pub title: String,
    pub description: String,
    pub organizer_id: OrganizerId,
    pub date: Option<DateTime<Utc>>,
}

impl EventCreateRequest {
    /// Build the payload from a validated event.
    pub fn new(event: ValidEvent, organizer_id: OrganizerId) -> Self {
        let (title, location, date, description) = event.into_parts();
        Self {
            location,
            title,
            description,
            organizer_id,
            date: date.map(|d| d.and_time(NaiveTime::MIN).and_utc()),
        }
    }
}

/// Error body returned by the API on failure.
///
/// `message` stays raw JSON: some servers send a string, others a list of
/// validation messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ApiErrorBody {
    /// The message as display text.
    ///
    /// `None` when absent, `null`, `false`, `0` or the empty string. Lists are
    /// joined with `,`; other values use their JSON text.
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) if s.is_empty() => None,
            value => Some(display_text(value)),
        }
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Extract the structured `message` from an error response body.
///
/// Returns `None` when the body is not a JSON object or carries no usable
/// `message`.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.message_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{validate, EventDraft, Field};
    use chrono::NaiveDate;

    fn organizer() -> OrganizerId {
        "00000000-0000-0000-0000-000000000001".parse().unwrap()
    }

    fn meetup(date: Option<&str>) -> ValidEvent {
        let mut draft = EventDraft::new()
            .with(Field::Eventname, "Meetup")
            .with(Field::Local, "Downtown Hall")
            .with(Field::Hour, "18:00")
            .with(Field::Description, "Monthly community meetup");
        if let Some(date) = date {
            draft.set_date(date);
        }
        validate(&draft).unwrap()
    }

    #[test]
    fn test_request_from_valid_event() {
        let req = EventCreateRequest::new(meetup(Some("2024-06-15")), organizer());

        assert_eq!(req.title, "Meetup");
        assert_eq!(req.location, "Downtown Hall");
        assert_eq!(req.description, "Monthly community meetup");
        assert_eq!(req.organizer_id, organizer());
        assert_eq!(
            req.date,
            Some(
                NaiveDate::from_ymd_opt(2024, 6, 15)
                    .unwrap()
                    .and_time(NaiveTime::MIN)
                    .and_utc()
            )
        );
    }

    #[test]
    fn test_request_json_shape() {
        let req = EventCreateRequest::new(meetup(Some("2024-06-15")), organizer());
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "location": "Downtown Hall",
                "title": "Meetup",
                "description": "Monthly community meetup",
                "organizerId": "00000000-0000-0000-0000-000000000001",
                "date": "2024-06-15T00:00:00Z",
            })
        );
    }

    #[test]
    fn test_absent_date_serializes_as_null() {
        let req = EventCreateRequest::new(meetup(None), organizer());
        let json = serde_json::to_value(&req).unwrap();
        assert!(json["date"].is_null());
    }

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(r#"{"message":"Duplicate event"}"#),
            Some("Duplicate event".to_string())
        );
        assert_eq!(
            parse_error_message(r#"{"message":"Bad","code":409}"#),
            Some("Bad".to_string())
        );
        assert_eq!(parse_error_message(r#"{"error":"nope"}"#), None);
        assert_eq!(parse_error_message(r#"{"message":""}"#), None);
        assert_eq!(parse_error_message(r#"{"message":null}"#), None);
        assert_eq!(parse_error_message("Internal Server Error"), None);
        assert_eq!(parse_error_message(""), None);
    }

    #[test]
    fn test_parse_error_message_list() {
        let body = r#"{"statusCode":400,"message":["title should not be empty","date must be a Date"],"error":"Bad Request"}"#;
        assert_eq!(
            parse_error_message(body),
            Some("title should not be empty,date must be a Date".to_string())
        );
    }

    #[test]
    fn test_parse_error_message_non_string_values() {
        assert_eq!(parse_error_message(r#"{"message":42}"#), Some("42".to_string()));
        assert_eq!(parse_error_message(r#"{"message":true}"#), Some("true".to_string()));
        assert_eq!(parse_error_message(r#"{"message":0}"#), None);
        assert_eq!(parse_error_message(r#"{"message":false}"#), None);
    }

    #[test]
    fn test_parse_error_message_keeps_whitespace_message() {
        assert_eq!(
            parse_error_message(r#"{"message":"   "}"#),
            Some("   ".to_string())
        );
    }
}
