//! 損益平衡分析模型
//!
//! BEP = FC / (P - VC)

use or_core::{BreakEvenInput, BreakEvenResult, CostRevenuePoint, ModelConfig, OrError};

use crate::sampling::linspace;

/// 損益平衡模型
pub struct BreakEvenModel;

impl BreakEvenModel {
    /// 以預設配置計算損益平衡點與成本/收入曲線
    pub fn compute(input: &BreakEvenInput) -> or_core::Result<BreakEvenResult> {
        Self::compute_with(input, &ModelConfig::default())
    }

    /// 計算損益平衡點與成本/收入曲線
    ///
    /// 僅在售價大於單位變動成本時有定義；否則回傳
    /// [`or_core::OrError::UndefinedBreakEven`]。曲線在數量 0 至 2·BEP 間取樣。
    pub fn compute_with(
        input: &BreakEvenInput,
        config: &ModelConfig,
    ) -> or_core::Result<BreakEvenResult> {
        config.validate()?;
        if let Err(err) = input.validate() {
            tracing::warn!("損益平衡點無定義，不計算: {}", err);
            return Err(err);
        }

        let contribution_margin = input.contribution_margin();
        let break_even_quantity = input.fixed_cost / contribution_margin;
        let upper = 2.0 * break_even_quantity;
        if !upper.is_finite() {
            return Err(OrError::InvalidInput(format!(
                "BEP 超出數值範圍: FC={}, VC={}, P={}",
                input.fixed_cost, input.variable_cost_per_unit, input.price_per_unit
            )));
        }

        let cost_revenue_curve = linspace(0.0, upper, config.curve_samples)
            .into_iter()
            .map(|q| CostRevenuePoint {
                quantity: q,
                total_cost: Self::total_cost(input, q),
                total_revenue: Self::total_revenue(input, q),
            })
            .collect();

        let result = BreakEvenResult {
            break_even_quantity,
            break_even_revenue: Self::total_revenue(input, break_even_quantity),
            contribution_margin,
            cost_revenue_curve,
        };

        tracing::debug!(
            "BEP = {:.4}，邊際貢獻 = {:.4}",
            result.break_even_quantity,
            result.contribution_margin
        );

        Ok(result)
    }

    /// 總成本 TC(q) = FC + VC·q
    pub fn total_cost(input: &BreakEvenInput, quantity: f64) -> f64 {
        input.fixed_cost + input.variable_cost_per_unit * quantity
    }

    /// 總收入 TR(q) = P·q
    pub fn total_revenue(input: &BreakEvenInput, quantity: f64) -> f64 {
        input.price_per_unit * quantity
    }

    /// 利潤 TR(q) - TC(q)
    pub fn profit_at(input: &BreakEvenInput, quantity: f64) -> f64 {
        Self::total_revenue(input, quantity) - Self::total_cost(input, quantity)
    }
}
