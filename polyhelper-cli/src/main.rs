//! polyhelper CLI
//!
//! One-shot helper meant to be spawned by another runtime: reads its command
//! from argv and prints a single JSON line on stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod handler;

/// Printed when no command is given, so callers can check the helper runs
const BANNER: &str = "Python helper module loaded";

#[derive(Debug, Parser)]
#[command(name = "polyhelper", version)]
#[command(about = "Stateless helper functions that print one JSON result", long_about = None)]
struct Cli {
    /// Format of log lines written to stderr
    #[arg(
        long,
        value_enum,
        env = "POLYHELPER_LOG_FORMAT",
        default_value_t = LogFormat::Text
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<handler::Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_logging(format: LogFormat) {
    // stdout carries the result, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    let args = handler::escape_command_args(&Cli::command(), std::env::args_os().collect());
    let cli = Cli::parse_from(args);
    init_logging(cli.log_format);

    let mut stdout = io::stdout().lock();

    let Some(command) = cli.command else {
        writeln!(stdout, "{}", BANNER)?;
        return Ok(());
    };

    let response = handler::handle(command)?;
    let json = serde_json::to_string(&response).context("Failed to encode result")?;

    debug!("Sending: {}", json);
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;

    Ok(())
}
