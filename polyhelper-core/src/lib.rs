//! polyhelper Core Library
//!
//! Small, stateless helpers meant to be called from another runtime:
//! - Greeting, arithmetic, list statistics and text analysis
//! - JSON request/response protocol shared by the CLI and bindings
//! - Subprocess client for invoking a helper and decoding its output
//! - Python bindings (pyo3, optional)

pub mod client;
pub mod error;
pub mod number;
pub mod ops;
pub mod protocol;

#[cfg(feature = "python")]
mod python;

pub use client::HelperClient;
pub use error::{HelperError, Result};
pub use number::Number;
pub use ops::{analyze_text, calculate, greet, process_list, ListSummary, Operation, TextAnalysis};
pub use protocol::{dispatch, Request, Response};
