//! evently_core - functional core for the event creation form.
//!
//! Draft state, per-field validation, request derivation, localized messages
//! and outcome projection. Nothing in this crate performs I/O.

pub mod auth;
pub mod event;
