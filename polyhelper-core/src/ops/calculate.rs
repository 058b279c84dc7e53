//! Two-operand arithmetic

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
    ];

    /// Look up an operation by its tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
        }
    }

    /// Apply to two operands.
    ///
    /// `None` for division by zero and for results JSON cannot represent
    /// (infinities and NaN).
    pub fn apply(&self, a: f64, b: f64) -> Option<f64> {
        let result = match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => {
                if b == 0.0 {
                    return None;
                }
                a / b
            }
            Operation::Power => a.powf(b),
        };

        result.is_finite().then_some(result)
    }
}

/// Evaluate `operation` on `a` and `b`; unknown tags yield `None`.
pub fn calculate(operation: &str, a: f64, b: f64) -> Option<f64> {
    match Operation::from_tag(operation) {
        Some(op) => op.apply(a, b),
        None => {
            debug!("Unknown operation: {}", operation);
            None
        }
    }
}
