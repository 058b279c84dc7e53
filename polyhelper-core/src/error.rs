//! Helper error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    // Input errors
    #[error("Invalid number list: {message}")]
    InvalidList { message: String },

    // Subprocess errors
    #[error("Failed to start helper '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Helper exited with {}: {stderr}", describe_code(.code))]
    Failed { code: Option<i32>, stderr: String },

    // Serialization errors
    #[error("Failed to decode helper output: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl HelperError {
    pub fn invalid_list(message: impl Into<String>) -> Self {
        HelperError::InvalidList {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_message() {
        let err = HelperError::Failed {
            code: Some(1),
            stderr: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Helper exited with status 1: boom");

        let err = HelperError::Failed {
            code: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_invalid_list_message() {
        let err = HelperError::invalid_list("expected a JSON array");
        assert_eq!(
            err.to_string(),
            "Invalid number list: expected a JSON array"
        );
    }
}
