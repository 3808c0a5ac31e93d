//! 互動式計算工作階段
//!
//! 保存四個分頁目前的輸入；EOQ、排隊與損益平衡模型在輸入變更後
//! 由 [`ModelSession::refresh`] 自動重新計算，生產優化則需呼叫
//! [`ModelSession::run_optimization`] 明確觸發。模型本身不持有任何狀態。

use chrono::{DateTime, Utc};
use or_calc::{BreakEvenModel, InventoryModel, ModelWarning, QueueModel, WarningSeverity};
use or_core::{
    round_for_display, BreakEvenInput, EoqInput, ModelConfig, ModelKind, OptimizationInput,
    QueueInput, ShellDefaults,
};
use or_optimizer::ProductionOptimizer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dirty_tracking::DirtyTracker;
use crate::sink::{RenderEvent, RenderSink, Series};

/// 單次計算結果摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluationOutcome {
    /// 已輸出結果
    Rendered,
    /// 前置條件不成立，已輸出警告
    Warned(String),
    /// 計算失敗，已輸出錯誤訊息
    Failed(String),
}

/// 單次計算記錄（每次請求皆有獨立 ID）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub request_id: Uuid,
    pub model: ModelKind,
    pub computed_at: DateTime<Utc>,
    pub outcome: EvaluationOutcome,
}

impl EvaluationRecord {
    fn new(model: ModelKind, outcome: EvaluationOutcome) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            model,
            computed_at: Utc::now(),
            outcome,
        }
    }
}

/// 互動式工作階段
pub struct ModelSession {
    config: ModelConfig,
    production: OptimizationInput,
    inventory: EoqInput,
    queue: QueueInput,
    break_even: BreakEvenInput,
    tracker: DirtyTracker,
    history: Vec<EvaluationRecord>,
}

impl ModelSession {
    /// 以內建表單預設值創建工作階段
    pub fn new(config: ModelConfig) -> or_core::Result<Self> {
        Self::from_defaults(&ShellDefaults::default(), config)
    }

    /// 以指定表單預設值創建工作階段（所有模型皆待計算）
    ///
    /// 配置無效時回傳 [`or_core::OrError::InvalidConfig`]。
    pub fn from_defaults(defaults: &ShellDefaults, config: ModelConfig) -> or_core::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            production: defaults.optimization_input(),
            inventory: defaults.eoq_input(),
            queue: defaults.queue_input(),
            break_even: defaults.break_even_input(),
            tracker: DirtyTracker::all_dirty(),
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn production_input(&self) -> &OptimizationInput {
        &self.production
    }

    pub fn eoq_input(&self) -> &EoqInput {
        &self.inventory
    }

    pub fn queue_input(&self) -> &QueueInput {
        &self.queue
    }

    pub fn break_even_input(&self) -> &BreakEvenInput {
        &self.break_even
    }

    /// 計算歷史
    pub fn history(&self) -> &[EvaluationRecord] {
        &self.history
    }

    /// 取出並清空計算歷史
    pub fn take_history(&mut self) -> Vec<EvaluationRecord> {
        std::mem::take(&mut self.history)
    }

    /// 待計算的模型
    pub fn pending(&self) -> Vec<ModelKind> {
        self.tracker.get_dirty_models()
    }

    pub fn set_production_input(&mut self, input: OptimizationInput) {
        if input != self.production {
            self.production = input;
            self.tracker.mark_dirty(ModelKind::Production);
        }
    }

    pub fn set_eoq_input(&mut self, input: EoqInput) {
        if input != self.inventory {
            self.inventory = input;
            self.tracker.mark_dirty(ModelKind::Inventory);
        }
    }

    pub fn set_queue_input(&mut self, input: QueueInput) {
        if input != self.queue {
            self.queue = input;
            self.tracker.mark_dirty(ModelKind::Queue);
        }
    }

    pub fn set_break_even_input(&mut self, input: BreakEvenInput) {
        if input != self.break_even {
            self.break_even = input;
            self.tracker.mark_dirty(ModelKind::BreakEven);
        }
    }

    /// 重新計算輸入已變更的自動模型（EOQ、排隊、損益平衡）
    pub fn refresh(&mut self, sink: &mut dyn RenderSink) -> Vec<EvaluationRecord> {
        let models = self.tracker.take_auto_recompute();
        tracing::debug!("重新計算模型: {:?}", models);

        models
            .into_iter()
            .map(|model| {
                let outcome = match model {
                    ModelKind::Inventory => self.render_inventory(sink),
                    ModelKind::Queue => self.render_queue(sink),
                    ModelKind::BreakEven => self.render_break_even(sink),
                    // 生產優化不會出現在自動重算清單中
                    ModelKind::Production => EvaluationOutcome::Rendered,
                };
                self.record(model, outcome)
            })
            .collect()
    }

    /// 明確觸發生產優化（對應「計算」按鈕）
    pub fn run_optimization(&mut self, sink: &mut dyn RenderSink) -> EvaluationRecord {
        let outcome = self.render_production(sink);
        self.tracker.mark_clean(ModelKind::Production);
        self.record(ModelKind::Production, outcome)
    }

    fn record(&mut self, model: ModelKind, outcome: EvaluationOutcome) -> EvaluationRecord {
        let record = EvaluationRecord::new(model, outcome);
        tracing::info!(
            "計算完成 [{}] {:?}: {:?}",
            record.request_id,
            record.model,
            record.outcome
        );
        self.history.push(record.clone());
        record
    }

    fn render_production(&self, sink: &mut dyn RenderSink) -> EvaluationOutcome {
        let model = ModelKind::Production;
        let result = ProductionOptimizer::solve(&self.production);

        if !result.feasible {
            let message = result.messages.join("; ");
            return report(sink, ModelWarning::error(model, message));
        }

        self.scalar(sink, model, "Product A", result.units_a);
        self.scalar(sink, model, "Product B", result.units_b);
        self.scalar(sink, model, "Total profit", result.total_profit);
        sink.render(RenderEvent::Bars {
            model,
            x_label: "Product".to_string(),
            y_label: "Units produced".to_string(),
            bars: result
                .production_bars()
                .iter()
                .map(|(name, units)| (name.to_string(), *units))
                .collect(),
        });

        EvaluationOutcome::Rendered
    }

    fn render_inventory(&self, sink: &mut dyn RenderSink) -> EvaluationOutcome {
        let model = ModelKind::Inventory;
        let result = match InventoryModel::compute_with(&self.inventory, &self.config) {
            Ok(result) => result,
            Err(err) => return report(sink, ModelWarning::from_error(model, &err)),
        };

        self.scalar(sink, model, "EOQ", result.eoq_quantity);
        self.scalar(sink, model, "Minimum total cost", result.min_total_cost);
        sink.render(RenderEvent::Curve {
            model,
            x_label: "Order Quantity".to_string(),
            y_label: "Total Cost".to_string(),
            series: vec![Series::new(
                "Total Cost",
                result
                    .cost_curve
                    .iter()
                    .map(|p| (p.quantity, p.total_cost))
                    .collect(),
            )],
            marker: Some(("EOQ".to_string(), result.eoq_quantity)),
        });

        EvaluationOutcome::Rendered
    }

    fn render_queue(&self, sink: &mut dyn RenderSink) -> EvaluationOutcome {
        let model = ModelKind::Queue;
        let result = match QueueModel::compute_with(&self.queue, &self.config) {
            Ok(result) => result,
            Err(err) => return report(sink, ModelWarning::from_error(model, &err)),
        };

        self.scalar(sink, model, "Utilization", result.utilization);
        self.scalar(sink, model, "Lq", result.avg_queue_length);
        self.scalar(sink, model, "Wq", result.avg_wait_time);
        sink.render(RenderEvent::Bars {
            model,
            x_label: "Customers in system".to_string(),
            y_label: "Probability".to_string(),
            bars: result
                .system_size_distribution
                .iter()
                .map(|p| (p.n.to_string(), p.probability))
                .collect(),
        });

        EvaluationOutcome::Rendered
    }

    fn render_break_even(&self, sink: &mut dyn RenderSink) -> EvaluationOutcome {
        let model = ModelKind::BreakEven;
        let result = match BreakEvenModel::compute_with(&self.break_even, &self.config) {
            Ok(result) => result,
            Err(err) => return report(sink, ModelWarning::from_error(model, &err)),
        };

        self.scalar(sink, model, "Break-even point", result.break_even_quantity);
        let curve = &result.cost_revenue_curve;
        sink.render(RenderEvent::Curve {
            model,
            x_label: "Quantity".to_string(),
            y_label: "Cost / Revenue".to_string(),
            series: vec![
                Series::new(
                    "Total Cost",
                    curve.iter().map(|p| (p.quantity, p.total_cost)).collect(),
                ),
                Series::new(
                    "Total Revenue",
                    curve.iter().map(|p| (p.quantity, p.total_revenue)).collect(),
                ),
            ],
            marker: Some(("Break-Even Point".to_string(), result.break_even_quantity)),
        });

        EvaluationOutcome::Rendered
    }

    fn scalar(&self, sink: &mut dyn RenderSink, model: ModelKind, label: &str, value: f64) {
        match round_for_display(value, self.config.display_decimals) {
            Some(value) => sink.render(RenderEvent::Scalar {
                model,
                label: label.to_string(),
                value,
            }),
            None => sink.render(RenderEvent::Error {
                model,
                message: format!("{} 無法顯示: {}", label, value),
            }),
        }
    }
}

fn report(sink: &mut dyn RenderSink, warning: ModelWarning) -> EvaluationOutcome {
    match warning.severity {
        WarningSeverity::Warning => {
            sink.render(RenderEvent::Warning {
                model: warning.model,
                message: warning.message.clone(),
            });
            EvaluationOutcome::Warned(warning.message)
        }
        WarningSeverity::Error => {
            sink.render(RenderEvent::Error {
                model: warning.model,
                message: warning.message.clone(),
            });
            EvaluationOutcome::Failed(warning.message)
        }
    }
}
