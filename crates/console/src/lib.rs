//! # Shiftboard Console
//!
//! Terminal front end for the shift-request service. Each subcommand maps to
//! one or two API calls; the result is rendered as plain text.
//!
//! ## Architecture
//!
//! - **Commands**: `clap` definitions of the subcommands and their arguments
//! - **Config**: environment configuration (API URL, session, log level)
//! - **Render**: tables and availability grids as text
//!
//! The dispatcher [`run`] is generic over [`ShiftApi`] so it can be driven by
//! the HTTP client or by a mock in tests.

/// Subcommand definitions
pub mod commands;
/// Configuration loaded from the environment
pub mod config;
/// Text output
pub mod render;

use eyre::{Result, WrapErr};
use shiftboard_client::{ApiClient, ShiftApi};
use shiftboard_core::{
    errors::{ShiftError, ShiftResult},
    grid::{GridBuilder, GroupAxis},
    models::{NewEntry, NewRequest},
};
use tracing::debug;
use tracing_subscriber::FmtSubscriber;

use crate::commands::Command;

/// Executes one command against `api` and returns the text to print.
pub async fn run<A: ShiftApi + ?Sized>(api: &A, command: Command) -> ShiftResult<String> {
    match command {
        Command::Login { login_id, password } => {
            let session = api.login(&login_id, &password).await?;
            Ok(match session {
                Some(value) => format!("Logged in as {login_id}.\nexport SHIFTBOARD_SESSION={value}\n"),
                None => format!("Logged in as {login_id}, but the server did not set a session cookie.\n"),
            })
        }
        Command::Logout => {
            api.logout().await?;
            Ok("Logged out. Unset SHIFTBOARD_SESSION to forget the cookie.\n".to_string())
        }
        Command::Whoami => {
            let user = api.session().await?;
            Ok(render::session(&user))
        }
        Command::Requests => {
            let requests = api.list_requests().await?;
            debug!(count = requests.len(), "Fetched requests");
            Ok(render::requests(&requests))
        }
        Command::Create {
            start_date,
            end_date,
            deadline,
        } => {
            let new_request = NewRequest {
                start_date,
                end_date,
                deadline,
            };
            new_request.validate()?;
            let created = api.create_request(&new_request).await?;
            Ok(format!("Created request #{}.\n", created.id))
        }
        Command::Show {
            id,
            by,
            from_hour,
            to_hour,
        } => {
            if from_hour > to_hour {
                return Err(ShiftError::Validation(format!(
                    "--from-hour {from_hour} is after --to-hour {to_hour}"
                )));
            }
            let detail = api.get_request(id).await?;
            let grid = GridBuilder::new(&detail.entries, detail.request.date_range())
                .axis(GroupAxis::from(by))
                .expected_submitters(detail.known_submitters())
                .hours(from_hour..=to_hour)
                .build();

            let mut out = render::request_summary(&detail.request, detail.entries.len());
            out.push('\n');
            out.push_str(&render::grid(&grid));
            Ok(out)
        }
        Command::Submit { id, slots } => {
            let detail = api.get_request(id).await?;
            let range = detail.request.date_range();
            for slot in &slots {
                slot.validate_within(&range)?;
            }
            let slots = normalize_slots(slots);
            debug!(request_id = id, count = slots.len(), "Submitting normalized slots");
            let created = api.submit_entries(id, &slots).await?;
            Ok(format!(
                "Submitted {} slot(s) for request #{}.\n",
                created.entries.len(),
                created.id
            ))
        }
    }
}

/// Chronological order, duplicates dropped.
fn normalize_slots(mut slots: Vec<NewEntry>) -> Vec<NewEntry> {
    slots.sort_by_key(|slot| (slot.date, slot.hour));
    slots.dedup();
    slots
}

/// Sets up logging, builds the HTTP client and runs `command`, printing the
/// result to stdout.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> eyre::Result<()> {
/// use shiftboard_console::{commands::Command, config::ConsoleConfig, start_console};
///
/// let config = ConsoleConfig::from_env()?;
/// start_console(config, Command::Requests).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_console(config: config::ConsoleConfig, command: Command) -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = ApiClient::new(config.api_url.clone(), config.timeout())?.with_session(config.session.clone());
    debug!(api_url = %client.base_url(), session = client.has_session(), "Console starting");

    let logging_in = matches!(command, Command::Login { .. });
    match run(&client, command).await {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(error) if error.is_authentication() && !logging_in => {
            Err(error).wrap_err("Not logged in. Run `shiftboard login <LOGIN_ID>` and export SHIFTBOARD_SESSION")
        }
        Err(error) => Err(error.into()),
    }
}
