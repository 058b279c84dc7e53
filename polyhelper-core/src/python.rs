//! Python bindings for polyhelper-core
//!
//! Provides pyo3 FFI interface so Python can call the helpers in-process
//! instead of spawning the `polyhelper` binary.

use pyo3::prelude::*;

use crate::ops;
use crate::ops::stats::parse_number_list;

/// Greet a person
#[pyfunction]
#[pyo3(signature = (name=ops::DEFAULT_NAME))]
fn greet(name: &str) -> String {
    ops::greet(name)
}

/// Perform a calculation; None for divide-by-zero or an unknown operation
#[pyfunction]
fn calculate(operation: &str, a: f64, b: f64) -> Option<f64> {
    ops::calculate(operation, a, b)
}

/// Summarize a JSON-encoded list of numbers, returning the summary as JSON
#[pyfunction]
fn process_list(numbers_json: &str) -> PyResult<String> {
    let numbers = parse_number_list(numbers_json)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;

    serde_json::to_string(&ops::process_list(&numbers))
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}

/// Analyze text, returning the counts as JSON
#[pyfunction]
fn analyze_text(text: &str) -> PyResult<String> {
    serde_json::to_string(&ops::analyze_text(text))
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}

/// polyhelper Python module
#[pymodule]
fn polyhelper_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(greet, m)?)?;
    m.add_function(wrap_pyfunction!(calculate, m)?)?;
    m.add_function(wrap_pyfunction!(process_list, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_text, m)?)?;
    Ok(())
}
