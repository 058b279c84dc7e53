//! Operations exposed by the helper
//!
//! Every operation is a pure function of its arguments.

pub mod calculate;
pub mod greet;
pub mod stats;
pub mod text;

pub use calculate::{calculate, Operation};
pub use greet::{greet, DEFAULT_NAME};
pub use stats::{process_list, ListSummary};
pub use text::{analyze_text, TextAnalysis};
