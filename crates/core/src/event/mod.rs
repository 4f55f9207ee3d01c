mod error;
mod messages;
mod outcome;
mod requests;
mod types;
mod validation;

pub use error::{FieldError, ValidationErrors};
pub use messages::{Locale, Messages};
pub use outcome::{StatusMessage, SubmissionFailure};
pub use requests::{parse_error_message, ApiErrorBody, EventCreateRequest};
pub use types::{EventDraft, Field, ValidEvent};
pub use validation::{
    parse_date, validate, validate_date, validate_description, validate_eventname,
    validate_hour, validate_local, DESCRIPTION_MIN_LEN, EVENTNAME_MIN_LEN, HOUR_MIN_LEN,
    LOCAL_MIN_LEN,
};
