//! evently CLI entry point.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use evently_client::cli::events::EventsAction;
use evently_client::cli::{Cli, Commands, OutputFormat};
use evently_client::client::EventsApi;
use evently_client::output::{format_output, json, pretty};
use evently_client::session::StaticSessionProvider;
use evently_client::{interactive, EventlyClient, FormController, SubmitError};
use evently_core::auth::SessionProvider;
use evently_core::event::{Locale, ValidationErrors};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "evently=info,evently_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config();
    let locale = config.locale;
    let client = EventlyClient::from_config(&config);
    let sessions = StaticSessionProvider::for_user(config.session_user);

    tracing::debug!(base_url = %client.base_url(), locale = locale.tag(), "Starting");

    let Commands::Events(events_cmd) = cli.command;
    match events_cmd.action {
        EventsAction::Create {
            draft,
            interactive: prompt,
        } => {
            let mut form = FormController::new(client, sessions)
                .with_config(&config)
                .with_draft(draft.into_draft());
            if prompt {
                interactive::fill_draft(&mut form)?;
            }
            Ok(create(&mut form, cli.format, cli.quiet).await)
        }
        EventsAction::Validate { draft } => {
            let form = FormController::new(client, sessions)
                .with_config(&config)
                .with_draft(draft.into_draft());
            match form.preview().await {
                Ok(req) => {
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&req, cli.format)?),
                        OutputFormat::Pretty => {
                            println!(
                                "{}",
                                pretty::format_request(&req, form.draft().hour(), locale)
                            )
                        }
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(SubmitError::Validation(errors)) => {
                    print_field_errors(&errors, locale, cli.format);
                    Ok(ExitCode::FAILURE)
                }
                Err(SubmitError::Failed(err)) => Err(err.into()),
            }
        }
    }
}

/// Submit once and print the outcome.
async fn create<A, S>(
    form: &mut FormController<A, S>,
    format: OutputFormat,
    quiet: bool,
) -> ExitCode
where
    A: EventsApi,
    S: SessionProvider,
{
    let locale = form.locale();
    let result = form.submit().await;

    if let Err(SubmitError::Validation(errors)) = &result {
        print_field_errors(errors, locale, format);
        return ExitCode::FAILURE;
    }

    if let Some(status) = form.status() {
        match format {
            OutputFormat::Json => println!("{}", json::format_status(status, locale)),
            OutputFormat::Pretty if status.is_success() && quiet => {}
            OutputFormat::Pretty if status.is_success() => println!("{}", status.render(locale)),
            OutputFormat::Pretty => eprintln!("{}", status.render(locale)),
        }
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_field_errors(errors: &ValidationErrors, locale: Locale, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", json::format_field_errors(errors, locale)),
        OutputFormat::Pretty => eprintln!("{}", pretty::format_field_errors(errors, locale)),
    }
}
