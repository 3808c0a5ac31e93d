//! # OR Calculation Engine
//!
//! EOQ、M/M/1 與損益平衡模型計算（皆為無狀態純函式）

pub mod break_even;
pub mod eoq;
pub mod queueing;
pub mod sampling;
pub mod sweep;

// Re-export 主要類型
pub use break_even::BreakEvenModel;
pub use eoq::InventoryModel;
pub use queueing::QueueModel;

use or_core::{ModelKind, OrError};
use serde::{Deserialize, Serialize};

/// 模型警告（前置條件不成立時保留結果）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelWarning {
    pub model: ModelKind,
    pub message: String,
    pub severity: WarningSeverity,
}

impl ModelWarning {
    pub fn new(model: ModelKind, message: String, severity: WarningSeverity) -> Self {
        Self {
            model,
            message,
            severity,
        }
    }

    pub fn warning(model: ModelKind, message: String) -> Self {
        Self::new(model, message, WarningSeverity::Warning)
    }

    pub fn error(model: ModelKind, message: String) -> Self {
        Self::new(model, message, WarningSeverity::Error)
    }

    /// 由模型錯誤轉換：前置條件不成立為警告，其餘為錯誤
    pub fn from_error(model: ModelKind, err: &OrError) -> Self {
        if err.is_warning() {
            Self::warning(model, err.to_string())
        } else {
            Self::error(model, err.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Warning,
    Error,
}
