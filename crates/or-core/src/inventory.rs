//! 庫存模型（經濟訂購量 EOQ）

use serde::{Deserialize, Serialize};

use crate::OrError;

/// EOQ 輸入參數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EoqInput {
    /// 年需求量 D
    pub annual_demand: f64,

    /// 每次訂購成本 S
    pub order_cost: f64,

    /// 每單位每年持有成本 H
    pub holding_cost: f64,
}

impl EoqInput {
    pub fn new(annual_demand: f64, order_cost: f64, holding_cost: f64) -> Self {
        Self {
            annual_demand,
            order_cost,
            holding_cost,
        }
    }

    /// 前置條件：D、S、H 皆為有限正數
    pub fn validate(&self) -> crate::Result<()> {
        let valid = [self.annual_demand, self.order_cost, self.holding_cost]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0);

        if valid {
            Ok(())
        } else {
            Err(OrError::InvalidEoqParameters {
                annual_demand: self.annual_demand,
                order_cost: self.order_cost,
                holding_cost: self.holding_cost,
            })
        }
    }
}

/// 總成本曲線取樣點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    /// 訂購量 q
    pub quantity: f64,

    /// 年訂購成本 (D/q)·S
    pub ordering_cost: f64,

    /// 年持有成本 (q/2)·H
    pub holding_cost: f64,

    /// 年總成本
    pub total_cost: f64,
}

/// EOQ 計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EoqResult {
    /// 經濟訂購量
    pub eoq_quantity: f64,

    /// EOQ 下的最小年總成本
    pub min_total_cost: f64,

    /// 每年訂購次數
    pub orders_per_year: f64,

    /// 訂購週期（年）
    pub cycle_time_years: f64,

    /// 總成本曲線（依訂購量遞增）
    pub cost_curve: Vec<CostPoint>,
}

impl EoqResult {
    /// 曲線上總成本最低的取樣點
    pub fn lowest_sampled_cost(&self) -> Option<&CostPoint> {
        self.cost_curve
            .iter()
            .min_by(|a, b| a.total_cost.total_cmp(&b.total_cost))
    }
}
