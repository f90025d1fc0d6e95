//! PyO3 wrapper for DeterministicRng

use pyo3::exceptions::{PyEOFError, PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::error::RngError;
use crate::generator::DeterministicRng;

fn to_py_err(err: RngError) -> PyErr {
    match err {
        RngError::TruncatedData { .. } => PyEOFError::new_err(err.to_string()),
        RngError::Io(_) => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Python wrapper for Rust DeterministicRng
///
/// # Example (from Python)
///
/// ```python
/// from resumable_rng import DeterministicRng
///
/// rng = DeterministicRng(12345)
/// roll = rng.next_int_below(6)
/// saved = rng.to_text()          # '{"Seed":12345,"CallCount":1}'
///
/// resumed = DeterministicRng.from_text(saved)
/// assert resumed.next_float() == rng.next_float()
/// ```
#[pyclass(name = "DeterministicRng")]
pub struct PyDeterministicRng {
    inner: DeterministicRng,
}

#[pymethods]
impl PyDeterministicRng {
    /// Create a generator; without a seed the wall clock is used
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<i32>) -> Self {
        let inner = match seed {
            Some(seed) => DeterministicRng::new(seed),
            None => DeterministicRng::from_entropy(),
        };
        PyDeterministicRng { inner }
    }

    /// Rebuild a generator at `draw_count` draws into `seed`'s sequence
    ///
    /// Raises ValueError if `draw_count` is negative.
    #[staticmethod]
    fn restore(seed: i32, draw_count: i32) -> PyResult<Self> {
        let inner = DeterministicRng::restore(seed, draw_count).map_err(to_py_err)?;
        Ok(PyDeterministicRng { inner })
    }

    /// Raises ValueError when given None or malformed text
    #[staticmethod]
    #[pyo3(signature = (text))]
    fn from_text(text: Option<&str>) -> PyResult<Self> {
        let text = text.ok_or(RngError::NullInput("text")).map_err(to_py_err)?;
        let inner = DeterministicRng::from_text(text).map_err(to_py_err)?;
        Ok(PyDeterministicRng { inner })
    }

    /// Raises ValueError when given None, EOFError when short of 8 bytes
    #[staticmethod]
    #[pyo3(signature = (data))]
    fn from_bytes(data: Option<&[u8]>) -> PyResult<Self> {
        let data = data.ok_or(RngError::NullInput("binary")).map_err(to_py_err)?;
        let inner = DeterministicRng::from_bytes(data).map_err(to_py_err)?;
        Ok(PyDeterministicRng { inner })
    }

    fn next_int(&mut self) -> i32 {
        self.inner.next_int()
    }

    fn next_int_below(&mut self, bound: i32) -> PyResult<i32> {
        self.inner.next_int_below(bound).map_err(to_py_err)
    }

    fn next_int_between(&mut self, low: i32, high: i32) -> PyResult<i32> {
        self.inner.next_int_between(low, high).map_err(to_py_err)
    }

    fn next_float(&mut self) -> f64 {
        self.inner.next_float()
    }

    #[getter]
    fn seed(&self) -> i32 {
        self.inner.seed()
    }

    #[getter]
    fn draw_count(&self) -> i32 {
        self.inner.draw_count()
    }

    /// `(seed, draw_count)` tuple
    fn export_state(&self) -> (i32, i32) {
        let state = self.inner.state();
        (state.seed, state.draw_count)
    }

    fn to_text(&self) -> String {
        self.inner.to_text()
    }

    fn to_bytes<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, &self.inner.to_bytes())
    }

    fn __repr__(&self) -> String {
        format!(
            "DeterministicRng(seed={}, draw_count={})",
            self.inner.seed(),
            self.inner.draw_count()
        )
    }
}
