use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::engine::engine_config::Strategy;
use crate::error::SolveError;
use crate::session::session::Session;
use crate::utils;

impl From<SolveError> for PyErr {
    fn from(error: SolveError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

#[pyclass(name = "Session")]
pub struct PySession {
    inner: Session,
}

#[pymethods]
impl PySession {
    #[new]
    pub fn new() -> Self {
        PySession {
            inner: Session::new(),
        }
    }

    #[getter]
    pub fn method(&self) -> &'static str {
        self.inner.strategy().name()
    }

    #[setter]
    pub fn set_method(&mut self, method: &str) -> PyResult<()> {
        self.inner.set_strategy(method.parse::<Strategy>()?);
        Ok(())
    }

    pub fn build(&mut self, variables: usize, equations: usize) {
        self.inner.build(variables, equations);
    }

    pub fn set(&mut self, row: usize, col: usize, value: String) -> PyResult<()> {
        let grid = self.inner.grid_mut().ok_or(SolveError::EmptyMatrix)?;
        Ok(grid.set(row, col, value)?)
    }

    pub fn solve(&mut self) -> PyResult<String> {
        let report = self.inner.solve()?;
        match report.to_json() {
            Ok(json) => Ok(json),
            Err(error) => Err(PyValueError::new_err(error.to_string())),
        }
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl Default for PySession {
    fn default() -> Self {
        Self::new()
    }
}

#[pyfunction]
fn format_number(x: f64) -> String {
    utils::format_number(x)
}

/// A Python module implemented in Rust.
#[pymodule]
fn row_reduction(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_function(wrap_pyfunction!(format_number, m)?)?;
    Ok(())
}
