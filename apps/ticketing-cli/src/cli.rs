//! Command-line surface and command execution.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use ticketing_core::{
    build_slug, resolve_entity_id, resolve_id, to_major, to_minor, CoreResult, CurrencyFormatter,
    EntityId, EntityKind, Money,
};

#[derive(Debug, Parser)]
#[command(name = "ticketing", version, about = "Slug and money utilities for the ticketing platform")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the id at the end of a slug (exit 1 when there is none)
    Resolve {
        slug: String,
        /// Parse the id as a number (normalizes leading zeros)
        #[arg(long)]
        numeric: bool,
    },
    /// Build a link slug from a title and id
    Slug {
        title: String,
        id: u64,
        #[arg(long, default_value = "event")]
        kind: EntityKind,
    },
    /// Convert a decimal amount to cents
    ToMinor {
        #[arg(allow_negative_numbers = true)]
        major: f64,
    },
    /// Convert cents to a decimal amount
    ToMajor {
        #[arg(allow_negative_numbers = true)]
        minor: i64,
    },
    /// Format cents for display
    Format {
        #[arg(allow_negative_numbers = true)]
        minor: i64,
        /// Locale tag; defaults to the configured locale
        #[arg(long)]
        locale: Option<String>,
    },
}

/// Runs a command. `Ok(None)` means "nothing found" (a slug without id).
pub fn execute(command: &Command, formatter: &CurrencyFormatter) -> CoreResult<Option<String>> {
    debug!(?command, "Executing command");

    let output = match command {
        Command::Resolve { slug, numeric: false } => resolve_id(slug).map(str::to_string),
        Command::Resolve { slug, numeric: true } => {
            resolve_entity_id(slug)?.map(|id| id.to_string())
        }
        Command::Slug { title, id, kind } => Some(build_slug(title, EntityId::new(*id), *kind)),
        Command::ToMinor { major } => Some(to_minor(*major)?.cents().to_string()),
        Command::ToMajor { minor } => Some(to_major(Money::from_cents(*minor)).to_string()),
        Command::Format { minor, locale } => {
            Some(formatter.format(Money::from_cents(*minor), locale.as_deref()))
        }
    };

    Ok(output)
}
