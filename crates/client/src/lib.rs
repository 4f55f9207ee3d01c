//! evently_client - event creation form and CLI client for the evently API.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod interactive;
pub mod output;
pub mod session;

pub use client::EventlyClient;
pub use error::{ClientError, Result};
pub use form::{FormController, SubmitError};
