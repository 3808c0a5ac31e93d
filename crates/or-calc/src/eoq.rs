//! 經濟訂購量（EOQ）庫存模型
//!
//! EOQ = sqrt(2 * D * S / H)
//! TC(q) = (D / q) * S + (q / 2) * H

use or_core::{CostPoint, EoqInput, EoqResult, ModelConfig, OrError};

use crate::sampling::linspace;

/// EOQ 庫存模型
pub struct InventoryModel;

impl InventoryModel {
    /// 以預設配置計算 EOQ 與總成本曲線
    pub fn compute(input: &EoqInput) -> or_core::Result<EoqResult> {
        Self::compute_with(input, &ModelConfig::default())
    }

    /// 計算 EOQ 與總成本曲線
    ///
    /// 前置條件：D、S、H 皆為正數。不成立時不產生任何結果，
    /// 回傳 [`OrError::InvalidEoqParameters`]。
    ///
    /// 最佳解由公式直接求得，曲線僅供視覺化；
    /// 取樣區間為 (0, 2·EOQ]，第一點為 `min(eoq_curve_start, 2·EOQ / 取樣數)`。
    pub fn compute_with(input: &EoqInput, config: &ModelConfig) -> or_core::Result<EoqResult> {
        config.validate()?;
        if let Err(err) = input.validate() {
            tracing::warn!("EOQ 參數無效，不計算: {}", err);
            return Err(err);
        }

        let eoq_quantity = Self::economic_order_quantity(input);
        if !eoq_quantity.is_finite() {
            return Err(OrError::InvalidInput(format!(
                "EOQ 超出數值範圍: D={}, S={}, H={}",
                input.annual_demand, input.order_cost, input.holding_cost
            )));
        }

        let upper = 2.0 * eoq_quantity;
        let samples = config.curve_samples;
        let start = config.eoq_curve_start.min(upper / samples as f64);

        let cost_curve: Vec<CostPoint> = linspace(start, upper, samples)
            .into_iter()
            .map(|q| Self::cost_point(input, q))
            .collect();

        let result = EoqResult {
            eoq_quantity,
            min_total_cost: Self::total_cost(input, eoq_quantity),
            orders_per_year: input.annual_demand / eoq_quantity,
            cycle_time_years: eoq_quantity / input.annual_demand,
            cost_curve,
        };

        tracing::debug!(
            "EOQ = {:.4}，最小總成本 = {:.4}，曲線點數 {}",
            result.eoq_quantity,
            result.min_total_cost,
            result.cost_curve.len()
        );

        Ok(result)
    }

    /// EOQ = sqrt(2DS / H)
    pub fn economic_order_quantity(input: &EoqInput) -> f64 {
        (2.0 * input.annual_demand * input.order_cost / input.holding_cost).sqrt()
    }

    /// 年總成本 TC(q)，q 必須為正數
    pub fn total_cost(input: &EoqInput, quantity: f64) -> f64 {
        Self::cost_point(input, quantity).total_cost
    }

    fn cost_point(input: &EoqInput, quantity: f64) -> CostPoint {
        let ordering_cost = input.annual_demand / quantity * input.order_cost;
        let holding_cost = quantity / 2.0 * input.holding_cost;
        CostPoint {
            quantity,
            ordering_cost,
            holding_cost,
            total_cost: ordering_cost + holding_cost,
        }
    }
}
