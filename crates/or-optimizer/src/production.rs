//! 生產組合優化
//!
//! 在工時上限下最大化兩種產品的總利潤：
//! max profit_a·xA + profit_b·xB，s.t. hours_a·xA + hours_b·xB <= max_hours，xA, xB >= 0。

use or_core::{OptimizationInput, OptimizationResult, OrError};

use crate::lp::{LinearProgram, LpStatus};

/// 生產優化器
pub struct ProductionOptimizer;

impl ProductionOptimizer {
    /// 建立對應的線性規劃（最大化）
    pub fn formulate(input: &OptimizationInput) -> LinearProgram {
        LinearProgram::maximize(input.profits(), input.hours(), input.max_hours)
    }

    /// 求解生產組合
    ///
    /// 無最佳解（不可行、無界或係數無效）時回傳 `feasible = false`、
    /// 產量歸零的結果，並附上失敗原因。不重試。
    pub fn solve(input: &OptimizationInput) -> OptimizationResult {
        tracing::info!(
            "開始生產優化：利潤 ({}, {})，工時 ({}, {})，上限 {}",
            input.profit_a,
            input.profit_b,
            input.hours_per_unit_a,
            input.hours_per_unit_b,
            input.max_hours
        );

        let status = Self::formulate(input).solve();
        let result = match status {
            LpStatus::Optimal { x, .. } => {
                // 頂點座標可能為 -0.0
                let units_a = x[0].max(0.0);
                let units_b = x[1].max(0.0);
                OptimizationResult::feasible(input, units_a, units_b)
            }
            LpStatus::Infeasible => {
                OptimizationResult::infeasible("優化失敗：工時約束下無可行解".to_string())
            }
            LpStatus::Unbounded => {
                OptimizationResult::infeasible("優化失敗：利潤無上界，請檢查工時係數".to_string())
            }
            LpStatus::InvalidCoefficients => {
                OptimizationResult::infeasible("優化失敗：係數含非有限數值".to_string())
            }
        };

        if result.feasible {
            tracing::info!(
                "生產優化完成：A = {:.2}，B = {:.2}，總利潤 {:.2}",
                result.units_a,
                result.units_b,
                result.total_profit
            );
        } else {
            tracing::warn!("生產優化失敗: {:?}", status);
        }

        result
    }

    /// 求解，不可行時回傳 [`OrError::InfeasibleOptimization`]
    pub fn try_solve(input: &OptimizationInput) -> or_core::Result<OptimizationResult> {
        let result = Self::solve(input);
        if result.feasible {
            Ok(result)
        } else {
            Err(OrError::InfeasibleOptimization(result.messages.join("; ")))
        }
    }
}
