//! Interactive terminal form.
//!
//! Prompts for every field, then re-prompts only the fields that fail
//! validation, showing their inline error, until the draft is valid.

use dialoguer::Input;

use evently_core::auth::SessionProvider;
use evently_core::event::{Field, Locale};

use crate::client::EventsApi;
use crate::error::{ClientError, Result};
use crate::form::FormController;

/// Prompt for all fields until the draft validates.
pub fn fill_draft<A, S>(form: &mut FormController<A, S>) -> Result<()>
where
    A: EventsApi,
    S: SessionProvider,
{
    let locale = form.locale();

    for field in Field::ALL {
        let value = prompt_field(locale, field, form.draft().get(field), None)?;
        form.set_field(field, value);
    }

    while let Err(errors) = form.validate() {
        for error in errors.iter() {
            let field = error.field();
            let value = prompt_field(
                locale,
                field,
                form.draft().get(field),
                Some(error.localized(locale)),
            )?;
            form.set_field(field, value);
        }
    }

    Ok(())
}

fn prompt_field(
    locale: Locale,
    field: Field,
    current: &str,
    error: Option<&str>,
) -> Result<String> {
    if let Some(error) = error {
        eprintln!("  {}", error);
    }
    let messages = locale.messages();
    let prompt = format!("{} ({})", messages.label(field), messages.placeholder(field));

    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ClientError::Prompt(e.to_string()))
}
