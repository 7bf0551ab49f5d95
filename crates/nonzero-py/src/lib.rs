//! csrc - Python extension module exposing the nonzero predicate
//!
//! Elements are pulled from the Python iterable one at a time and converted
//! to integers only when the scan reaches them, so anything behind the
//! deciding element is never touched.

use nonzero_core::{Checker, CheckerConfig, Error, Int, Mode};
use pyo3::create_exception;
use pyo3::exceptions::{PyRuntimeError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyLong;
use tracing::debug;
use tracing_subscriber::EnvFilter;

create_exception!(
    csrc,
    InvalidElementError,
    PyTypeError,
    "Raised when a sequence element cannot be compared with integer zero."
);

/// Convert a Python object to an integer.
///
/// The outer result carries exceptions raised by Python itself; the inner one
/// reports an element that is not an `int` (or `bool`, which subclasses it).
fn to_int(index: usize, obj: &Bound<'_, PyAny>) -> PyResult<nonzero_core::Result<Int>> {
    if !obj.is_instance_of::<PyLong>() {
        let type_name = obj.get_type().name()?.to_string();
        return Ok(Err(Error::invalid_element(index, type_name)));
    }

    if let Ok(value) = obj.extract::<i128>() {
        return Ok(Ok(Int::from(value)));
    }

    // Wider than i128: only the sign is left to record
    let negative = obj.lt(0)?;
    Ok(Ok(Int::Big { negative }))
}

fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::InvalidElement { .. } => InvalidElementError::new_err(err.to_string()),
        _ => PyRuntimeError::new_err(err.to_string()),
    }
}

/// Run a checker over any Python iterable
fn check_iterable(checker: &Checker, seq: &Bound<'_, PyAny>) -> PyResult<bool> {
    let mut raised: Option<PyErr> = None;

    let items = seq.iter()?.enumerate().map(|(index, item)| {
        item.and_then(|obj| to_int(index, &obj))
            .unwrap_or_else(|err| {
                raised = Some(err);
                Err(Error::internal("python exception while iterating"))
            })
    });
    let outcome = checker.try_scan(items);

    if let Some(err) = raised {
        return Err(err);
    }

    let scan = outcome.map_err(to_py_err)?;
    debug!(
        "{:?} -> {} ({} elements inspected)",
        checker.config().mode,
        scan.decision,
        scan.inspected
    );
    Ok(scan.decision)
}

/// Operate on integer list; return True if no element equals zero.
///
/// Stops at the first zero. An empty sequence returns True.
#[pyfunction]
#[pyo3(signature = (aList))]
#[allow(non_snake_case)]
fn nonzero(aList: &Bound<'_, PyAny>) -> PyResult<bool> {
    check_iterable(&Checker::new(), aList)
}

/// Operate on integer list; return True if a nonzero element exists.
///
/// Stops at the first nonzero element. An empty sequence returns False.
#[pyfunction]
#[pyo3(signature = (aList))]
#[allow(non_snake_case)]
fn any_nonzero(aList: &Bound<'_, PyAny>) -> PyResult<bool> {
    let checker = Checker::with_config(CheckerConfig::new().mode(Mode::AnyNonzero));
    check_iterable(&checker, aList)
}

/// Install a stderr log subscriber filtered by `directive`.
///
/// Returns False if a subscriber is already installed.
#[pyfunction]
#[pyo3(signature = (directive = "warn"))]
fn init_tracing(directive: &str) -> PyResult<bool> {
    let filter = EnvFilter::try_new(directive).map_err(|e| {
        PyValueError::new_err(format!("invalid tracing directive '{}': {}", directive, e))
    })?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    Ok(installed)
}

/// Native nonzero predicate over integer sequences.
#[pymodule]
fn csrc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add(
        "InvalidElementError",
        m.py().get_type_bound::<InvalidElementError>(),
    )?;
    m.add_function(wrap_pyfunction!(nonzero, m)?)?;
    m.add_function(wrap_pyfunction!(any_nonzero, m)?)?;
    m.add_function(wrap_pyfunction!(init_tracing, m)?)?;
    Ok(())
}
