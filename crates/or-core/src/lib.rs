//! # OR Core
//!
//! 核心資料模型與類型定義（四個作業研究模型的輸入與結果）

pub mod break_even;
pub mod config;
pub mod display;
pub mod inventory;
pub mod production;
pub mod queue;

// Re-export 主要類型
pub use break_even::{BreakEvenInput, BreakEvenResult, CostRevenuePoint};
pub use config::{ModelConfig, ShellDefaults, MAX_QUEUE_STATES};
pub use display::round_for_display;
pub use inventory::{CostPoint, EoqInput, EoqResult};
pub use production::{OptimizationInput, OptimizationResult};
pub use queue::{QueueInput, QueueResult, StateProbability};

use serde::{Deserialize, Serialize};

/// 模型種類（對應呈現層的四個分頁）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModelKind {
    /// 生產優化（線性規劃）
    Production,
    /// 庫存（EOQ）
    Inventory,
    /// 排隊（M/M/1）
    Queue,
    /// 損益平衡
    BreakEven,
}

impl ModelKind {
    /// 所有模型，依分頁順序
    pub const ALL: [ModelKind; 4] = [
        ModelKind::Production,
        ModelKind::Inventory,
        ModelKind::Queue,
        ModelKind::BreakEven,
    ];

    /// 輸入變更時是否自動重新計算（生產優化需明確觸發）
    pub fn recomputes_on_change(&self) -> bool {
        !matches!(self, ModelKind::Production)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModelKind::Production => "Production Optimization (Linear Programming)",
            ModelKind::Inventory => "Inventory Model (EOQ)",
            ModelKind::Queue => "Queueing Model (M/M/1)",
            ModelKind::BreakEven => "Break-Even Point Analysis",
        }
    }
}

/// 模型錯誤類型
///
/// 所有錯誤皆為非致命錯誤，由呈現層轉為警告或錯誤訊息。
#[derive(Debug, thiserror::Error)]
pub enum OrError {
    #[error("生產優化失敗: {0}")]
    InfeasibleOptimization(String),

    #[error("系統不穩定：到達率 λ={arrival_rate} 必須介於 0 與服務率 μ={service_rate} 之間")]
    UnstableQueue { arrival_rate: f64, service_rate: f64 },

    #[error("無法計算損益平衡點：售價 {price} 必須大於單位變動成本 {variable_cost}")]
    UndefinedBreakEven { price: f64, variable_cost: f64 },

    #[error("EOQ 參數必須皆為正數: D={annual_demand}, S={order_cost}, H={holding_cost}")]
    InvalidEoqParameters {
        annual_demand: f64,
        order_cost: f64,
        holding_cost: f64,
    },

    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl OrError {
    /// 是否屬於「保留結果並警告」類型（而非計算失敗）
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            OrError::UnstableQueue { .. }
                | OrError::UndefinedBreakEven { .. }
                | OrError::InvalidEoqParameters { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, OrError>;

/// 檢查所有數值皆為有限值
pub(crate) fn ensure_finite(field_values: &[(&str, f64)]) -> Result<()> {
    for (field, value) in field_values {
        if !value.is_finite() {
            return Err(OrError::InvalidInput(format!("{} 不是有限數值: {}", field, value)));
        }
    }
    Ok(())
}
