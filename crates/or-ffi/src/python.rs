//! Python 綁定實現

use or_calc::{BreakEvenModel, InventoryModel, QueueModel};
use or_core::{
    BreakEvenInput, BreakEvenResult, EoqInput, EoqResult, OptimizationInput, OptimizationResult,
    OrError, QueueInput, QueueResult,
};
use or_optimizer::ProductionOptimizer;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// 前置條件不成立時轉為 Python ValueError
fn to_py_err(err: OrError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python 生產優化結果
#[pyclass(name = "OptimizationResult", get_all)]
#[derive(Debug, Clone)]
pub struct PyOptimizationResult {
    pub units_a: f64,
    pub units_b: f64,
    pub total_profit: f64,
    pub feasible: bool,
    pub messages: Vec<String>,
}

impl From<OptimizationResult> for PyOptimizationResult {
    fn from(result: OptimizationResult) -> Self {
        Self {
            units_a: result.units_a,
            units_b: result.units_b,
            total_profit: result.total_profit,
            feasible: result.feasible,
            messages: result.messages,
        }
    }
}

/// Python EOQ 結果（曲線拆成兩個陣列，方便直接繪圖）
#[pyclass(name = "EoqResult", get_all)]
#[derive(Debug, Clone)]
pub struct PyEoqResult {
    pub eoq_quantity: f64,
    pub min_total_cost: f64,
    pub quantities: Vec<f64>,
    pub total_costs: Vec<f64>,
}

impl From<EoqResult> for PyEoqResult {
    fn from(result: EoqResult) -> Self {
        Self {
            eoq_quantity: result.eoq_quantity,
            min_total_cost: result.min_total_cost,
            quantities: result.cost_curve.iter().map(|p| p.quantity).collect(),
            total_costs: result.cost_curve.iter().map(|p| p.total_cost).collect(),
        }
    }
}

/// Python M/M/1 結果
#[pyclass(name = "QueueResult", get_all)]
#[derive(Debug, Clone)]
pub struct PyQueueResult {
    pub utilization: f64,
    pub avg_queue_length: f64,
    pub avg_wait_time: f64,
    pub states: Vec<u32>,
    pub probabilities: Vec<f64>,
}

impl From<QueueResult> for PyQueueResult {
    fn from(result: QueueResult) -> Self {
        Self {
            utilization: result.utilization,
            avg_queue_length: result.avg_queue_length,
            avg_wait_time: result.avg_wait_time,
            states: result.system_size_distribution.iter().map(|p| p.n).collect(),
            probabilities: result
                .system_size_distribution
                .iter()
                .map(|p| p.probability)
                .collect(),
        }
    }
}

/// Python 損益平衡結果
#[pyclass(name = "BreakEvenResult", get_all)]
#[derive(Debug, Clone)]
pub struct PyBreakEvenResult {
    pub break_even_quantity: f64,
    pub quantities: Vec<f64>,
    pub total_costs: Vec<f64>,
    pub total_revenues: Vec<f64>,
}

impl From<BreakEvenResult> for PyBreakEvenResult {
    fn from(result: BreakEvenResult) -> Self {
        let curve = &result.cost_revenue_curve;
        Self {
            break_even_quantity: result.break_even_quantity,
            quantities: curve.iter().map(|p| p.quantity).collect(),
            total_costs: curve.iter().map(|p| p.total_cost).collect(),
            total_revenues: curve.iter().map(|p| p.total_revenue).collect(),
        }
    }
}

/// 求解生產組合（失敗時 feasible = False，不拋出例外）
#[pyfunction]
pub fn solve_production(
    profit_a: f64,
    profit_b: f64,
    hours_per_unit_a: f64,
    hours_per_unit_b: f64,
    max_hours: f64,
) -> PyOptimizationResult {
    let input = OptimizationInput::new(
        profit_a,
        profit_b,
        hours_per_unit_a,
        hours_per_unit_b,
        max_hours,
    );
    ProductionOptimizer::solve(&input).into()
}

/// 計算 EOQ 與總成本曲線
#[pyfunction]
pub fn economic_order_quantity(
    annual_demand: f64,
    order_cost: f64,
    holding_cost: f64,
) -> PyResult<PyEoqResult> {
    let input = EoqInput::new(annual_demand, order_cost, holding_cost);
    InventoryModel::compute(&input).map(Into::into).map_err(to_py_err)
}

/// 計算 M/M/1 指標
#[pyfunction]
pub fn mm1_queue(arrival_rate: f64, service_rate: f64) -> PyResult<PyQueueResult> {
    let input = QueueInput::new(arrival_rate, service_rate);
    QueueModel::compute(&input).map(Into::into).map_err(to_py_err)
}

/// 計算損益平衡點與曲線
#[pyfunction]
pub fn break_even(
    fixed_cost: f64,
    variable_cost_per_unit: f64,
    price_per_unit: f64,
) -> PyResult<PyBreakEvenResult> {
    let input = BreakEvenInput::new(fixed_cost, variable_cost_per_unit, price_per_unit);
    BreakEvenModel::compute(&input).map(Into::into).map_err(to_py_err)
}
