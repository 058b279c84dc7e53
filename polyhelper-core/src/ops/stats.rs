//! Summary statistics over a list of numbers

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{HelperError, Result};
use crate::number::Number;

/// Result of `process_list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSummary {
    pub sum: Number,
    /// `sum / len` as a float, integer `0` for an empty list
    pub average: Number,
    pub min: Option<Number>,
    pub max: Option<Number>,
    pub sorted: Vec<Number>,
}

pub fn process_list(numbers: &[Number]) -> ListSummary {
    let sum = numbers
        .iter()
        .fold(Number::Int(0), |acc, n| acc.add(*n));

    let average = if numbers.is_empty() {
        Number::Int(0)
    } else {
        Number::Float(sum.to_f64() / numbers.len() as f64)
    };

    let mut sorted = numbers.to_vec();
    // Stable, so equal values keep their input order
    sorted.sort_by(|a, b| a.numeric_cmp(b));

    ListSummary {
        sum,
        average,
        min: first_extreme(numbers, Ordering::Less),
        max: first_extreme(numbers, Ordering::Greater),
        sorted,
    }
}

/// First element that no later element beats in direction `wanted`.
fn first_extreme(numbers: &[Number], wanted: Ordering) -> Option<Number> {
    numbers.iter().copied().reduce(|best, n| {
        if n.numeric_cmp(&best) == wanted {
            n
        } else {
            best
        }
    })
}

/// Parse the list argument: a JSON array whose elements are all numbers.
pub fn parse_number_list(input: &str) -> Result<Vec<Number>> {
    let value: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| HelperError::invalid_list(format!("not valid JSON: {}", e)))?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(HelperError::invalid_list(format!(
                "expected a JSON array, found {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match &item {
            serde_json::Value::Number(n) => Ok(match n.as_i64() {
                Some(v) => Number::Int(v),
                None => Number::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            other => Err(HelperError::invalid_list(format!(
                "element {} is {}, expected a number",
                index,
                json_kind(other)
            ))),
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
