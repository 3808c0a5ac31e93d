//! 呈現輸出介面

use or_core::ModelKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 一條曲線（依 x 遞增的 (x, y) 取樣點）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// 呈現事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderEvent {
    /// 已格式化的純量結果
    Scalar {
        model: ModelKind,
        label: String,
        value: Decimal,
    },

    /// 折線圖（可帶一條垂直標記線，例如 EOQ 或 BEP）
    Curve {
        model: ModelKind,
        x_label: String,
        y_label: String,
        series: Vec<Series>,
        marker: Option<(String, f64)>,
    },

    /// 長條圖
    Bars {
        model: ModelKind,
        x_label: String,
        y_label: String,
        bars: Vec<(String, f64)>,
    },

    /// 前置條件不成立的警告
    Warning { model: ModelKind, message: String },

    /// 計算失敗訊息
    Error { model: ModelKind, message: String },
}

impl RenderEvent {
    pub fn model(&self) -> ModelKind {
        match self {
            RenderEvent::Scalar { model, .. }
            | RenderEvent::Curve { model, .. }
            | RenderEvent::Bars { model, .. }
            | RenderEvent::Warning { model, .. }
            | RenderEvent::Error { model, .. } => *model,
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, RenderEvent::Warning { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RenderEvent::Error { .. })
    }
}

/// 呈現層接收端
pub trait RenderSink {
    fn render(&mut self, event: RenderEvent);
}

/// 記錄所有事件的接收端（測試與 JSON 匯出用）
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<RenderEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// 指定模型的事件
    pub fn events_for(&self, model: ModelKind) -> Vec<&RenderEvent> {
        self.events.iter().filter(|e| e.model() == model).collect()
    }

    /// 依標籤查找純量值（取最後一次）
    pub fn scalar(&self, model: ModelKind, label: &str) -> Option<Decimal> {
        self.events.iter().rev().find_map(|event| match event {
            RenderEvent::Scalar {
                model: m,
                label: l,
                value,
            } if *m == model && l == label => Some(*value),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn to_json(&self) -> or_core::Result<String> {
        Ok(serde_json::to_string_pretty(&self.events)?)
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, event: RenderEvent) {
        self.events.push(event);
    }
}
