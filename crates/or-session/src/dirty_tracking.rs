//! 髒標記追蹤

use std::collections::BTreeSet;

use or_core::ModelKind;

/// 髒標記追蹤器（記錄輸入已變更、需要重新計算的模型）
pub struct DirtyTracker {
    dirty_models: BTreeSet<ModelKind>,
}

impl DirtyTracker {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self {
            dirty_models: BTreeSet::new(),
        }
    }

    /// 創建所有模型皆為髒的追蹤器（首次呈現）
    pub fn all_dirty() -> Self {
        Self {
            dirty_models: ModelKind::ALL.into_iter().collect(),
        }
    }

    /// 標記模型為髒
    pub fn mark_dirty(&mut self, model: ModelKind) {
        self.dirty_models.insert(model);
    }

    /// 檢查模型是否為髒
    pub fn is_dirty(&self, model: ModelKind) -> bool {
        self.dirty_models.contains(&model)
    }

    /// 清除單一模型的髒標記
    pub fn mark_clean(&mut self, model: ModelKind) {
        self.dirty_models.remove(&model);
    }

    /// 清除所有髒標記
    pub fn clear(&mut self) {
        self.dirty_models.clear();
    }

    /// 獲取所有髒模型（依分頁順序）
    pub fn get_dirty_models(&self) -> Vec<ModelKind> {
        self.dirty_models.iter().copied().collect()
    }

    /// 取出需自動重新計算的髒模型並清除其標記
    pub fn take_auto_recompute(&mut self) -> Vec<ModelKind> {
        let models: Vec<ModelKind> = self
            .dirty_models
            .iter()
            .copied()
            .filter(|m| m.recomputes_on_change())
            .collect();
        for model in &models {
            self.dirty_models.remove(model);
        }
        models
    }
}

impl Default for DirtyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_clear() {
        let mut tracker = DirtyTracker::new();
        assert!(tracker.get_dirty_models().is_empty());

        tracker.mark_dirty(ModelKind::Queue);
        tracker.mark_dirty(ModelKind::Queue);
        assert!(tracker.is_dirty(ModelKind::Queue));
        assert_eq!(tracker.get_dirty_models(), vec![ModelKind::Queue]);

        tracker.mark_clean(ModelKind::Queue);
        assert!(!tracker.is_dirty(ModelKind::Queue));

        tracker.mark_dirty(ModelKind::BreakEven);
        tracker.clear();
        assert!(tracker.get_dirty_models().is_empty());
    }

    #[test]
    fn test_take_auto_recompute_leaves_production() {
        let mut tracker = DirtyTracker::all_dirty();

        let models = tracker.take_auto_recompute();
        assert_eq!(
            models,
            vec![ModelKind::Inventory, ModelKind::Queue, ModelKind::BreakEven]
        );

        // 生產優化需明確觸發，保持為髒
        assert_eq!(tracker.get_dirty_models(), vec![ModelKind::Production]);
        assert!(tracker.take_auto_recompute().is_empty());
    }
}
