//! CLI command definitions.

pub mod events;

use clap::{Parser, Subcommand, ValueEnum};
use evently_core::auth::OrganizerId;
use evently_core::event::Locale;
use uuid::Uuid;

use crate::config::{legacy_organizer, Config};

/// CLI client for the evently API.
#[derive(Debug, Parser)]
#[command(name = "evently")]
#[command(version, about = "Create events on the evently API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "EVENTLY_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Message language.
    #[arg(long, env = "EVENTLY_LOCALE", default_value = "pt-br", ignore_case = true)]
    pub locale: LocaleArg,

    /// Signed-in user, used as the event organizer.
    #[arg(long, env = "EVENTLY_SESSION_USER")]
    pub session_user: Option<Uuid>,

    /// Organizer used when no user is signed in.
    #[arg(long, env = "EVENTLY_ORGANIZER_ID")]
    pub organizer_id: Option<Uuid>,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve flags (and their environment fallbacks) into a [`Config`].
    pub fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            locale: self.locale.into(),
            fallback_organizer: self
                .organizer_id
                .map(OrganizerId::new)
                .unwrap_or_else(legacy_organizer),
            session_user: self.session_user,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// CLI locale (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LocaleArg {
    /// Brazilian Portuguese.
    #[default]
    #[value(name = "pt-br")]
    PtBr,
    /// English.
    En,
}

impl From<LocaleArg> for Locale {
    fn from(locale: LocaleArg) -> Self {
        match locale {
            LocaleArg::PtBr => Locale::PtBr,
            LocaleArg::En => Locale::En,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Event creation.
    Events(events::EventsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use events::EventsAction;

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "evently",
            "--locale",
            "en",
            "events",
            "create",
            "--name",
            "Meetup",
            "--local",
            "Downtown Hall",
            "--hour",
            "18:00",
        ])
        .unwrap();

        assert!(matches!(Locale::from(cli.locale), Locale::En));
        let Commands::Events(events) = cli.command;
        match events.action {
            EventsAction::Create { draft, interactive } => {
                assert!(!interactive);
                let draft = draft.into_draft();
                assert_eq!(draft.eventname(), "Meetup");
                assert_eq!(draft.local(), "Downtown Hall");
                assert_eq!(draft.date(), None);
                assert_eq!(draft.description(), "");
            }
            EventsAction::Validate { .. } => panic!("expected create"),
        }
    }

    #[test]
    fn test_organizer_flag() {
        let cli = Cli::try_parse_from([
            "evently",
            "--organizer-id",
            "0f0e0d0c-0b0a-4908-8706-050403020100",
            "events",
            "validate",
        ])
        .unwrap();

        let organizer = Uuid::parse_str("0f0e0d0c-0b0a-4908-8706-050403020100").unwrap();
        assert_eq!(cli.config().fallback_organizer, OrganizerId::new(organizer));
    }

    #[test]
    fn test_config_defaults_to_legacy_organizer() {
        let cli = Cli::try_parse_from(["evently", "events", "validate"]).unwrap();
        let config = cli.config();

        assert_eq!(config.fallback_organizer, legacy_organizer());
        assert_eq!(config.session_user, None);
    }
}
