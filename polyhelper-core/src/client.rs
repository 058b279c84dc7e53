//! Subprocess client
//!
//! Runs a helper program once per call and decodes the JSON line it prints.
//! Works with the `polyhelper` binary or any helper speaking the same
//! argv/stdout convention, e.g. `HelperClient::with_args("python3", ["helper.py"])`.

use std::ffi::{OsStr, OsString};
use std::process::{Command, Stdio};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{HelperError, Result};
use crate::number::Number;
use crate::ops::{ListSummary, TextAnalysis};
use crate::protocol::Request;

#[derive(Debug, Clone)]
pub struct HelperClient {
    program: OsString,
    /// Arguments placed before the command name (script path for interpreters)
    leading_args: Vec<OsString>,
}

impl HelperClient {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            leading_args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(program: impl AsRef<OsStr>, leading_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self {
            program: program.as_ref().to_os_string(),
            leading_args: leading_args
                .into_iter()
                .map(|a| a.as_ref().to_os_string())
                .collect(),
        }
    }

    pub fn greet(&self, name: &str) -> Result<String> {
        self.call(&Request::Greet {
            name: name.to_string(),
        })
    }

    pub fn calculate(&self, operation: &str, a: f64, b: f64) -> Result<Option<f64>> {
        self.call(&Request::Calculate {
            operation: operation.to_string(),
            a,
            b,
        })
    }

    pub fn process_list(&self, numbers: &[Number]) -> Result<ListSummary> {
        self.call(&Request::ProcessList {
            numbers: numbers.to_vec(),
        })
    }

    pub fn analyze_text(&self, text: &str) -> Result<TextAnalysis> {
        self.call(&Request::AnalyzeText {
            text: text.to_string(),
        })
    }

    /// Run the helper without a command and return its banner line
    pub fn banner(&self) -> Result<String> {
        let stdout = self.invoke(&[])?;
        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }

    /// Send a request and decode the printed result as `T`
    pub fn call<T: DeserializeOwned>(&self, request: &Request) -> Result<T> {
        let args = request.to_args();
        let stdout = self.invoke(&args)?;
        serde_json::from_slice(&stdout).map_err(|source| HelperError::Decode { source })
    }

    fn invoke(&self, args: &[String]) -> Result<Vec<u8>> {
        debug!("Running {:?} {:?} {:?}", self.program, self.leading_args, args);

        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| HelperError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("Helper failed ({}): {}", output.status, stderr);
            return Err(HelperError::Failed {
                code: output.status.code(),
                stderr,
            });
        }

        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program() {
        let client = HelperClient::new("/nonexistent/polyhelper-binary");
        let result = client.greet("World");
        assert!(matches!(result, Err(HelperError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_helper() {
        use std::io::Write;

        let mut script = tempfile::NamedTempFile::new().unwrap();
        writeln!(script, "echo 'bad input' >&2").unwrap();
        writeln!(script, "exit 3").unwrap();

        let client = HelperClient::with_args("sh", [script.path()]);
        match client.analyze_text("anything") {
            Err(HelperError::Failed { code, stderr }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "bad input");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_undecodable_output() {
        use std::io::Write;

        let mut script = tempfile::NamedTempFile::new().unwrap();
        writeln!(script, "echo 'not json'").unwrap();

        let client = HelperClient::with_args("sh", [script.path()]);
        let result = client.calculate("add", 1.0, 2.0);
        assert!(matches!(result, Err(HelperError::Decode { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_decodes_helper_output() {
        use std::io::Write;

        // Stand-in helper that echoes its arguments back as JSON strings
        let mut script = tempfile::NamedTempFile::new().unwrap();
        writeln!(script, "printf '\"%s|%s\"\\n' \"$1\" \"$2\"").unwrap();

        let client = HelperClient::with_args("sh", [script.path()]);
        let greeting = client.greet("Ada").unwrap();
        assert_eq!(greeting, "greet|Ada");
    }
}
