//! Greeting

/// Name used when the caller does not supply one
pub const DEFAULT_NAME: &str = "World";

pub fn greet(name: &str) -> String {
    format!("Hello from Python, {}!", name)
}
