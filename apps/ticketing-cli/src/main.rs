//! # Ticketing CLI
//!
//! Operator tool over `ticketing-core`: resolve slugs, build links, convert
//! and format amounts exactly the way the front-end does.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  args ──► init_tracing ──► TicketingConfig::load ──► execute ──► stdout │
//! │                                   │                      │              │
//! │                           file + env + validate     ticketing-core      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod config;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{execute, Cli};
use crate::config::TicketingConfig;

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();

    // An explicit --config must load cleanly; the implicit one may fall back
    let config = match cli.config.clone() {
        Some(path) => TicketingConfig::load(Some(path))?,
        None => TicketingConfig::load_or_default(None),
    };
    info!(
        default_locale = %config.format.default_locale,
        "Configuration loaded"
    );

    match execute(&cli.command, &config.formatter())? {
        Some(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            debug!("No result for command");
            eprintln!("no id");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays pipeable.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=ticketing_core=trace` - Show conversions
/// - Default: WARN, so normal runs print only the result
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
