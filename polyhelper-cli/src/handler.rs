//! Command handler for polyhelper
//!
//! Turns parsed arguments into a protocol request and dispatches it.

use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::Subcommand;
use polyhelper_core::ops::stats::parse_number_list;
use polyhelper_core::ops::DEFAULT_NAME;
use polyhelper_core::{dispatch, Request, Response};
use tracing::info;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a greeting as a JSON string
    #[command(name = "greet")]
    Greet {
        /// Name to greet (default: World)
        #[arg(allow_hyphen_values = true)]
        name: Option<String>,
    },

    /// Apply add, subtract, multiply, divide or power to two numbers
    #[command(name = "calculate")]
    Calculate {
        /// Operation tag; unknown tags print null
        #[arg(allow_hyphen_values = true)]
        operation: String,

        #[arg(allow_hyphen_values = true)]
        a: f64,

        #[arg(allow_hyphen_values = true)]
        b: f64,
    },

    /// Summarize a JSON array of numbers
    #[command(name = "process_list", alias = "process-list")]
    ProcessList {
        /// JSON-encoded list, e.g. '[3, 1, 2]'
        #[arg(allow_hyphen_values = true)]
        numbers: String,
    },

    /// Count characters, words and cased letters
    #[command(name = "analyze_text", alias = "analyze-text")]
    AnalyzeText {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

impl Commands {
    fn into_request(self) -> Result<Request> {
        Ok(match self {
            Commands::Greet { name } => Request::Greet {
                name: name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            },
            Commands::Calculate { operation, a, b } => Request::Calculate { operation, a, b },
            Commands::ProcessList { numbers } => Request::ProcessList {
                numbers: parse_number_list(&numbers)
                    .context("process_list expects a JSON array of numbers")?,
            },
            Commands::AnalyzeText { text } => Request::AnalyzeText { text },
        })
    }
}

/// Insert `--` right after the subcommand name.
///
/// Every token after the command is data (`--help`, `-inf`, `-x` are all
/// valid names, numbers or operation tags), so clap must not read any of
/// them as flags. Options before the command are left alone.
pub fn escape_command_args(cmd: &clap::Command, mut args: Vec<OsString>) -> Vec<OsString> {
    let valued_longs: Vec<String> = cmd
        .get_arguments()
        .filter(|arg| arg.get_action().takes_values())
        .filter_map(|arg| arg.get_long())
        .map(|long| format!("--{}", long))
        .collect();

    let mut index = 1;
    while index < args.len() {
        let token = args[index].to_string_lossy().into_owned();
        if valued_longs.iter().any(|long| *long == token) {
            index += 2;
        } else if token.starts_with('-') {
            index += 1;
        } else {
            if cmd.find_subcommand(&args[index]).is_some() {
                args.insert(index + 1, OsString::from("--"));
            }
            break;
        }
    }

    args
}

pub fn handle(command: Commands) -> Result<Response> {
    let request = command.into_request()?;
    info!("Handling {}", request.command());
    Ok(dispatch(&request))
}
