//! Event CLI commands.

use clap::{Args, Parser, Subcommand};
use evently_core::event::EventDraft;

/// Event commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Form fields given as flags. Missing flags leave the field empty.
#[derive(Debug, Clone, Default, Args)]
pub struct DraftArgs {
    /// Event name.
    #[arg(long = "name", default_value = "")]
    pub eventname: String,
    /// Event location.
    #[arg(long, default_value = "")]
    pub local: String,
    /// Event date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<String>,
    /// Event time (HH:MM).
    #[arg(long, default_value = "")]
    pub hour: String,
    /// Event description.
    #[arg(long, default_value = "")]
    pub description: String,
}

impl DraftArgs {
    pub fn into_draft(self) -> EventDraft {
        let mut draft = EventDraft::new();
        draft.set_eventname(self.eventname);
        draft.set_local(self.local);
        if let Some(date) = self.date {
            draft.set_date(date);
        }
        draft.set_hour(self.hour);
        draft.set_description(self.description);
        draft
    }
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// Validate the form and create the event.
    Create {
        #[command(flatten)]
        draft: DraftArgs,
        /// Prompt for each field instead of reading flags.
        #[arg(long, short)]
        interactive: bool,
    },
    /// Validate the form and print the request without sending it.
    Validate {
        #[command(flatten)]
        draft: DraftArgs,
    },
}
