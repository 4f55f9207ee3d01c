use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Eventname,
    Local,
    Date,
    Hour,
    Description,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 5] = [
        Field::Eventname,
        Field::Local,
        Field::Date,
        Field::Hour,
        Field::Description,
    ];

    /// Field name as used by the form.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Eventname => "eventname",
            Field::Local => "local",
            Field::Date => "date",
            Field::Hour => "hour",
            Field::Description => "description",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Mutable, not-yet-submitted event.
///
/// Starts empty: every text field is `""` and the date is absent. Values are
/// stored exactly as typed; nothing is checked until [`super::validate`] runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    eventname: String,
    local: String,
    date: Option<String>,
    hour: String,
    description: String,
}

impl EventDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eventname(&self) -> &str {
        &self.eventname
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    /// Raw date text, if one was entered.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn hour(&self) -> &str {
        &self.hour
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_eventname(&mut self, value: impl Into<String>) {
        self.eventname = value.into();
    }

    pub fn set_local(&mut self, value: impl Into<String>) {
        self.local = value.into();
    }

    /// Set the raw date text. Blank text clears the date.
    pub fn set_date(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.date = if value.trim().is_empty() {
            None
        } else {
            Some(value)
        };
    }

    pub fn clear_date(&mut self) {
        self.date = None;
    }

    pub fn set_hour(&mut self, value: impl Into<String>) {
        self.hour = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Set any field by name.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Eventname => self.set_eventname(value),
            Field::Local => self.set_local(value),
            Field::Date => self.set_date(value),
            Field::Hour => self.set_hour(value),
            Field::Description => self.set_description(value),
        }
    }

    /// Current text of a field (`""` for an absent date).
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Eventname => &self.eventname,
            Field::Local => &self.local,
            Field::Date => self.date.as_deref().unwrap_or(""),
            Field::Hour => &self.hour,
            Field::Description => &self.description,
        }
    }

    /// Builder-style setter, handy in tests and for flag-driven input.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

/// An event whose draft passed every field constraint.
///
/// Only [`super::validate`] constructs this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEvent {
    title: String,
    location: String,
    date: Option<NaiveDate>,
    hour: String,
    description: String,
}

impl ValidEvent {
    pub(super) fn new(
        title: String,
        location: String,
        date: Option<NaiveDate>,
        hour: String,
        description: String,
    ) -> Self {
        Self {
            title,
            location,
            date,
            hour,
            description,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn hour(&self) -> &str {
        &self.hour
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub(super) fn into_parts(self) -> (String, String, Option<NaiveDate>, String) {
        (self.title, self.location, self.date, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = EventDraft::new();
        for field in Field::ALL {
            assert_eq!(draft.get(field), "");
        }
        assert_eq!(draft.date(), None);
    }

    #[test]
    fn test_set_by_field() {
        let mut draft = EventDraft::new();
        draft.set(Field::Eventname, "Meetup");
        draft.set(Field::Hour, "18:00");

        assert_eq!(draft.eventname(), "Meetup");
        assert_eq!(draft.hour(), "18:00");
    }

    #[test]
    fn test_blank_date_clears() {
        let mut draft = EventDraft::new().with(Field::Date, "2024-06-15");
        assert_eq!(draft.date(), Some("2024-06-15"));

        draft.set_date("   ");
        assert_eq!(draft.date(), None);

        draft.set_date("2024-06-15");
        draft.clear_date();
        assert_eq!(draft.date(), None);
    }

    #[test]
    fn test_field_names_in_order() {
        let names: Vec<_> = Field::ALL.iter().map(Field::name).collect();
        assert_eq!(
            names,
            vec!["eventname", "local", "date", "hour", "description"]
        );
    }
}
