//! Pretty output formatting.

use evently_core::event::{EventCreateRequest, Field, Locale, ValidationErrors};

/// Format field errors, one block per failing field.
pub fn format_field_errors(errors: &ValidationErrors, locale: Locale) -> String {
    let messages = locale.messages();
    errors
        .iter()
        .map(|error| {
            format!(
                "{}\n  {}",
                messages.label(error.field()),
                error.localized(locale)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a request payload for display.
///
/// `hour` is shown for review only; the request has no time field.
pub fn format_request(req: &EventCreateRequest, hour: &str, locale: Locale) -> String {
    let messages = locale.messages();
    let date = match (req.date, locale) {
        (Some(date), Locale::PtBr) => date.format("%d/%m/%Y").to_string(),
        (Some(date), Locale::En) => date.format("%B %-d, %Y").to_string(),
        (None, _) => "-".to_string(),
    };
    format!(
        "{}\n  {}: {}\n  {}: {}\n  {}: {}\n  {}: {}\n  {}: {}",
        req.title,
        messages.label(Field::Local),
        req.location,
        messages.label(Field::Date),
        date,
        messages.label(Field::Hour),
        hour,
        messages.label(Field::Description),
        req.description,
        messages.organizer_label,
        req.organizer_id
    )
}
