//! Request / response protocol
//!
//! A request is one helper invocation; its response serializes to exactly
//! the JSON value the helper prints on stdout.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::number::Number;
use crate::ops::{self, ListSummary, TextAnalysis};

/// One helper invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum Request {
    /// Greet someone by name
    Greet { name: String },

    /// Apply an arithmetic operation; unknown operations are not an error
    Calculate { operation: String, a: f64, b: f64 },

    /// Summarize a list of numbers
    ProcessList { numbers: Vec<Number> },

    /// Count characters and words
    AnalyzeText { text: String },
}

impl Request {
    /// Command name as it appears on the command line
    pub fn command(&self) -> &'static str {
        match self {
            Request::Greet { .. } => "greet",
            Request::Calculate { .. } => "calculate",
            Request::ProcessList { .. } => "process_list",
            Request::AnalyzeText { .. } => "analyze_text",
        }
    }

    /// Positional command-line arguments, command name first
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![self.command().to_string()];
        match self {
            Request::Greet { name } => args.push(name.clone()),
            Request::Calculate { operation, a, b } => {
                args.push(operation.clone());
                args.push(a.to_string());
                args.push(b.to_string());
            }
            Request::ProcessList { numbers } => {
                let items: Vec<String> = numbers.iter().map(Number::to_string).collect();
                args.push(format!("[{}]", items.join(",")));
            }
            Request::AnalyzeText { text } => args.push(text.clone()),
        }
        args
    }
}

/// Result of one invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Greeting(String),
    Calculation(Option<f64>),
    ListSummary(ListSummary),
    TextAnalysis(TextAnalysis),
}

/// Route a request to its operation
pub fn dispatch(request: &Request) -> Response {
    debug!("Dispatching {}", request.command());

    match request {
        Request::Greet { name } => Response::Greeting(ops::greet(name)),
        Request::Calculate { operation, a, b } => {
            Response::Calculation(ops::calculate(operation, *a, *b))
        }
        Request::ProcessList { numbers } => Response::ListSummary(ops::process_list(numbers)),
        Request::AnalyzeText { text } => Response::TextAnalysis(ops::analyze_text(text)),
    }
}
