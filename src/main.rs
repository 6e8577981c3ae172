mod commands;
mod config;
mod diagnostics;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::commands::Context;
use crate::render::{GetFormat, ListFormat};

#[derive(Parser)]
#[command(name = "changelog", about = "Query Keep a Changelog documents", version)]
struct Cli {
    /// Subcommand; defaults to `get` for the default version.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Changelog to read (default: `path` from .changelog.toml, else CHANGELOG.md)
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Get one version, or a closed range like 0.1.1,0.1.2
    Get {
        /// Version label or two comma-separated labels (default: Unreleased)
        #[arg(value_delimiter = ',')]
        versions: Vec<String>,
        /// Output layout
        #[arg(long, value_enum, default_value_t = GetFormat::Raw)]
        format: GetFormat,
        /// Emit JSON instead of markdown
        #[arg(long)]
        json: bool,
        /// Only print link definitions referenced by the output
        #[arg(long)]
        referenced_links: bool,
    },
    /// List all versions in document order
    List {
        /// Print labels or full heading lines
        #[arg(long, value_enum, default_value_t = ListFormat::Raw)]
        format: ListFormat,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Move Unreleased changes under a new version heading
    Release {
        /// The version being released, e.g. 1.2.0
        version: String,
        /// Release date, YYYY-MM-DD (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Write the result back to the changelog instead of printing it
        #[arg(long)]
        write: bool,
    },
}

/// Parse a `YYYY-MM-DD` date argument.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    return NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| return format!("{e} (expected YYYY-MM-DD)"));
}

/// Install a stderr tracing subscriber when `-v` is given. `RUST_LOG` wins if set.
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "warn,changelog=info".to_string(),
            2 => "warn,changelog=debug".to_string(),
            _ => "debug,changelog=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| return EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context {
        file: cli.file,
        root: PathBuf::from("."),
    };

    let result = match cli.command {
        None => commands::get(&ctx, &[], GetFormat::Raw, false, false),
        Some(Commands::Get { versions, format, json, referenced_links }) => {
            commands::get(&ctx, &versions, format, json, referenced_links)
        },
        Some(Commands::List { format, json }) => commands::list(&ctx, format, json),
        Some(Commands::Release { version, date, write }) => {
            commands::release(&ctx, &version, date, write)
        },
    };

    return match result {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
    };
}
