//! # OR FFI
//!
//! Python 綁定層（PyO3），讓 Python 呈現層直接呼叫模型

use pyo3::prelude::*;

pub mod python;

/// Python 模組註冊
#[pymodule]
fn or_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyOptimizationResult>()?;
    m.add_class::<python::PyEoqResult>()?;
    m.add_class::<python::PyQueueResult>()?;
    m.add_class::<python::PyBreakEvenResult>()?;
    m.add_function(wrap_pyfunction!(python::solve_production, m)?)?;
    m.add_function(wrap_pyfunction!(python::economic_order_quantity, m)?)?;
    m.add_function(wrap_pyfunction!(python::mm1_queue, m)?)?;
    m.add_function(wrap_pyfunction!(python::break_even, m)?)?;
    Ok(())
}
