//! 生產組合優化模型（線性規劃）

use serde::{Deserialize, Serialize};

/// 生產優化輸入
///
/// 模型本身不限制正負號；數值驗證屬於呈現層的責任。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationInput {
    /// 產品 A 單位利潤
    pub profit_a: f64,

    /// 產品 B 單位利潤
    pub profit_b: f64,

    /// 產品 A 單位工時
    pub hours_per_unit_a: f64,

    /// 產品 B 單位工時
    pub hours_per_unit_b: f64,

    /// 可用工時上限
    pub max_hours: f64,
}

impl OptimizationInput {
    pub fn new(
        profit_a: f64,
        profit_b: f64,
        hours_per_unit_a: f64,
        hours_per_unit_b: f64,
        max_hours: f64,
    ) -> Self {
        Self {
            profit_a,
            profit_b,
            hours_per_unit_a,
            hours_per_unit_b,
            max_hours,
        }
    }

    /// 目標函數係數 [A, B]
    pub fn profits(&self) -> [f64; 2] {
        [self.profit_a, self.profit_b]
    }

    /// 工時約束係數 [A, B]
    pub fn hours(&self) -> [f64; 2] {
        [self.hours_per_unit_a, self.hours_per_unit_b]
    }

    /// 計算任意生產組合的利潤
    pub fn profit_of(&self, units_a: f64, units_b: f64) -> f64 {
        self.profit_a * units_a + self.profit_b * units_b
    }

    /// 計算任意生產組合使用的工時
    pub fn hours_of(&self, units_a: f64, units_b: f64) -> f64 {
        self.hours_per_unit_a * units_a + self.hours_per_unit_b * units_b
    }
}

/// 生產優化結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// 產品 A 最佳產量
    pub units_a: f64,

    /// 產品 B 最佳產量
    pub units_b: f64,

    /// 總利潤
    pub total_profit: f64,

    /// 是否可行
    pub feasible: bool,

    /// 使用工時
    pub hours_used: f64,

    /// 剩餘工時
    pub slack_hours: f64,

    /// 求解信息
    pub messages: Vec<String>,
}

impl OptimizationResult {
    /// 創建可行的優化結果
    pub fn feasible(input: &OptimizationInput, units_a: f64, units_b: f64) -> Self {
        let hours_used = input.hours_of(units_a, units_b);
        Self {
            units_a,
            units_b,
            total_profit: input.profit_of(units_a, units_b),
            feasible: true,
            hours_used,
            slack_hours: input.max_hours - hours_used,
            messages: Vec::new(),
        }
    }

    /// 創建不可行的優化結果（產量歸零）
    pub fn infeasible(message: String) -> Self {
        Self {
            units_a: 0.0,
            units_b: 0.0,
            total_profit: 0.0,
            feasible: false,
            hours_used: 0.0,
            slack_hours: 0.0,
            messages: vec![message],
        }
    }

    /// 長條圖資料（產品名稱, 產量）
    pub fn production_bars(&self) -> [(&'static str, f64); 2] {
        [("Product A", self.units_a), ("Product B", self.units_b)]
    }
}
