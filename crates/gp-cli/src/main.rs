//! gp - Government services portal CLI
//!
//! Each invocation restores the saved session before running its command,
//! so sign-in state carries across runs.
//!
//! # Examples
//!
//! ```bash
//! # Sign in as the demo officer
//! gp demo-login officer
//!
//! # List pending services
//! gp services --status pending --pretty
//!
//! # Sign out
//! gp logout
//! ```

use gp_cli::logger::{self, LogSink};
use gp_cli::{App, Cli, CliResult};
use gp_config::Config;
use gp_session::{FileSlot, MockAuthBackend, SessionStore};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut app = match bootstrap() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = app.execute(cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load config, start logging, and restore the saved session.
fn bootstrap() -> CliResult<App> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        LogSink::select(
            config.logging.file.as_ref().map(PathBuf::from),
            config.logging.colored,
        ),
    )?;
    config.log_summary();

    let backend = Arc::new(MockAuthBackend::with_default_credentials(
        config.auth.latency(),
    ));
    let slot = Arc::new(FileSlot::new(
        config.storage_dir()?,
        &config.storage.slot_key,
    ));

    Ok(App::new(SessionStore::initialize(backend, slot)))
}
