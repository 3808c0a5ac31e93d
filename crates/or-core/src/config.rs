//! 模型配置與呈現層預設值

use serde::{Deserialize, Serialize};

use crate::{BreakEvenInput, EoqInput, OptimizationInput, OrError, QueueInput};

/// 排隊分佈狀態數上限
pub const MAX_QUEUE_STATES: usize = 1000;

/// 模型計算參數配置（曲線取樣、顯示精度）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// 曲線取樣點數（EOQ 成本曲線、損益平衡曲線）
    pub curve_samples: usize,

    /// M/M/1 系統人數分佈顯示的狀態數（n = 1..=queue_states）
    pub queue_states: usize,

    /// EOQ 曲線起點上限（避免 q = 0 造成除以零）
    pub eoq_curve_start: f64,

    /// 顯示小數位數
    pub display_decimals: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            curve_samples: 100,
            queue_states: 10,
            eoq_curve_start: 1.0,
            display_decimals: 2,
        }
    }
}

impl ModelConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置曲線取樣點數
    pub fn with_curve_samples(mut self, samples: usize) -> Self {
        self.curve_samples = samples;
        self
    }

    /// 建構器模式：設置排隊分佈顯示狀態數
    pub fn with_queue_states(mut self, states: usize) -> Self {
        self.queue_states = states;
        self
    }

    /// 建構器模式：設置 EOQ 曲線起點上限
    pub fn with_eoq_curve_start(mut self, start: f64) -> Self {
        self.eoq_curve_start = start;
        self
    }

    /// 建構器模式：設置顯示小數位數
    pub fn with_display_decimals(mut self, decimals: u32) -> Self {
        self.display_decimals = decimals;
        self
    }

    /// 從 JSON 載入配置（缺少的欄位使用預設值）
    ///
    /// # 範例
    /// ```
    /// # use or_core::ModelConfig;
    /// let config = ModelConfig::from_json(r#"{ "curve_samples": 50 }"#).unwrap();
    /// assert_eq!(config.curve_samples, 50);
    /// assert_eq!(config.queue_states, 10);
    /// ```
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 驗證配置
    pub fn validate(&self) -> crate::Result<()> {
        if self.curve_samples < 2 {
            return Err(OrError::InvalidConfig(format!(
                "curve_samples 至少為 2，目前為 {}",
                self.curve_samples
            )));
        }
        if self.queue_states == 0 || self.queue_states > MAX_QUEUE_STATES {
            return Err(OrError::InvalidConfig(format!(
                "queue_states 必須介於 1 與 {}，目前為 {}",
                MAX_QUEUE_STATES, self.queue_states
            )));
        }
        if !(self.eoq_curve_start.is_finite() && self.eoq_curve_start > 0.0) {
            return Err(OrError::InvalidConfig(format!(
                "eoq_curve_start 必須為正數，目前為 {}",
                self.eoq_curve_start
            )));
        }
        if self.display_decimals > 10 {
            return Err(OrError::InvalidConfig(format!(
                "display_decimals 最多為 10，目前為 {}",
                self.display_decimals
            )));
        }
        Ok(())
    }
}

/// 呈現層表單預設值
///
/// 僅供 UI 相容使用，模型函式本身不讀取這些值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellDefaults {
    pub profit_a: f64,
    pub profit_b: f64,
    pub hours_per_unit_a: f64,
    pub hours_per_unit_b: f64,
    pub max_hours: f64,

    pub annual_demand: f64,
    pub order_cost: f64,
    pub holding_cost: f64,

    pub arrival_rate: f64,
    pub service_rate: f64,

    pub fixed_cost: f64,
    pub variable_cost_per_unit: f64,
    pub price_per_unit: f64,
}

impl Default for ShellDefaults {
    fn default() -> Self {
        Self {
            profit_a: 40.0,
            profit_b: 30.0,
            hours_per_unit_a: 2.0,
            hours_per_unit_b: 1.0,
            max_hours: 100.0,
            annual_demand: 1000.0,
            order_cost: 50.0,
            holding_cost: 2.0,
            arrival_rate: 2.0,
            service_rate: 3.0,
            fixed_cost: 10_000.0,
            variable_cost_per_unit: 20.0,
            price_per_unit: 50.0,
        }
    }
}

impl ShellDefaults {
    /// 從 JSON 載入預設值（缺少的欄位使用內建預設）
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn optimization_input(&self) -> OptimizationInput {
        OptimizationInput::new(
            self.profit_a,
            self.profit_b,
            self.hours_per_unit_a,
            self.hours_per_unit_b,
            self.max_hours,
        )
    }

    pub fn eoq_input(&self) -> EoqInput {
        EoqInput::new(self.annual_demand, self.order_cost, self.holding_cost)
    }

    pub fn queue_input(&self) -> QueueInput {
        QueueInput::new(self.arrival_rate, self.service_rate)
    }

    pub fn break_even_input(&self) -> BreakEvenInput {
        BreakEvenInput::new(self.fixed_cost, self.variable_cost_per_unit, self.price_per_unit)
    }
}
