//! 損益平衡分析模型

use serde::{Deserialize, Serialize};

use crate::OrError;

/// 損益平衡輸入參數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenInput {
    /// 固定成本
    pub fixed_cost: f64,

    /// 單位變動成本
    pub variable_cost_per_unit: f64,

    /// 單位售價
    pub price_per_unit: f64,
}

impl BreakEvenInput {
    pub fn new(fixed_cost: f64, variable_cost_per_unit: f64, price_per_unit: f64) -> Self {
        Self {
            fixed_cost,
            variable_cost_per_unit,
            price_per_unit,
        }
    }

    /// 單位邊際貢獻 P - VC
    pub fn contribution_margin(&self) -> f64 {
        self.price_per_unit - self.variable_cost_per_unit
    }

    /// 前置條件：售價大於單位變動成本
    pub fn validate(&self) -> crate::Result<()> {
        crate::ensure_finite(&[
            ("fixed_cost", self.fixed_cost),
            ("variable_cost_per_unit", self.variable_cost_per_unit),
            ("price_per_unit", self.price_per_unit),
        ])?;

        if self.price_per_unit > self.variable_cost_per_unit {
            Ok(())
        } else {
            Err(OrError::UndefinedBreakEven {
                price: self.price_per_unit,
                variable_cost: self.variable_cost_per_unit,
            })
        }
    }
}

/// 成本/收入曲線取樣點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRevenuePoint {
    pub quantity: f64,
    pub total_cost: f64,
    pub total_revenue: f64,
}

impl CostRevenuePoint {
    /// 該數量下的利潤（收入 - 成本）
    pub fn profit(&self) -> f64 {
        self.total_revenue - self.total_cost
    }
}

/// 損益平衡計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// 損益平衡數量
    pub break_even_quantity: f64,

    /// 損益平衡營收
    pub break_even_revenue: f64,

    /// 單位邊際貢獻
    pub contribution_margin: f64,

    /// 成本與收入曲線（數量 0 至 2·BEP）
    pub cost_revenue_curve: Vec<CostRevenuePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution_margin() {
        let input = BreakEvenInput::new(10_000.0, 20.0, 50.0);
        assert_eq!(input.contribution_margin(), 30.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_undefined_break_even() {
        // 售價等於變動成本
        let err = BreakEvenInput::new(10_000.0, 50.0, 50.0).validate().unwrap_err();
        assert!(matches!(err, OrError::UndefinedBreakEven { .. }));

        // 售價低於變動成本
        assert!(BreakEvenInput::new(10_000.0, 60.0, 50.0).validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = BreakEvenInput::new(f64::NAN, 20.0, 50.0).validate().unwrap_err();
        assert!(matches!(err, OrError::InvalidInput(_)));
    }

    #[test]
    fn test_point_profit() {
        let point = CostRevenuePoint {
            quantity: 100.0,
            total_cost: 12_000.0,
            total_revenue: 5_000.0,
        };
        assert_eq!(point.profit(), -7_000.0);
    }
}
