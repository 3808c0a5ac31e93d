//! 排隊模型（M/M/1）

use serde::{Deserialize, Serialize};

use crate::OrError;

/// M/M/1 輸入參數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueInput {
    /// 到達率 λ
    pub arrival_rate: f64,

    /// 服務率 μ
    pub service_rate: f64,
}

impl QueueInput {
    pub fn new(arrival_rate: f64, service_rate: f64) -> Self {
        Self {
            arrival_rate,
            service_rate,
        }
    }

    /// 穩定條件：0 < λ < μ
    pub fn is_stable(&self) -> bool {
        self.arrival_rate.is_finite()
            && self.service_rate.is_finite()
            && 0.0 < self.arrival_rate
            && self.arrival_rate < self.service_rate
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.is_stable() {
            Ok(())
        } else {
            Err(OrError::UnstableQueue {
                arrival_rate: self.arrival_rate,
                service_rate: self.service_rate,
            })
        }
    }
}

/// 系統內有 n 位顧客的穩態機率
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateProbability {
    pub n: u32,
    pub probability: f64,
}

/// M/M/1 計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueResult {
    /// 伺服器利用率 ρ = λ/μ
    pub utilization: f64,

    /// 平均排隊人數 Lq
    pub avg_queue_length: f64,

    /// 平均排隊等候時間 Wq
    pub avg_wait_time: f64,

    /// 系統閒置機率 P0 = 1 - ρ
    pub idle_probability: f64,

    /// 系統內平均人數 L
    pub avg_system_length: f64,

    /// 系統內平均停留時間 W
    pub avg_system_time: f64,

    /// 系統人數分佈 P(n)，n = 1..=N
    ///
    /// 僅為顯示用的截斷分佈，完整分佈延伸至無限大。
    pub system_size_distribution: Vec<StateProbability>,
}

impl QueueResult {
    /// 顯示狀態的機率總和（必小於 1）
    pub fn displayed_mass(&self) -> f64 {
        self.system_size_distribution.iter().map(|p| p.probability).sum()
    }

    /// 超出最後顯示狀態的尾端機率 ρ^(N+1)
    pub fn tail_mass(&self) -> f64 {
        let last = self
            .system_size_distribution
            .last()
            .map(|p| p.n)
            .unwrap_or(0);
        self.utilization.powi(last as i32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.0, 3.0, true)]
    #[case(3.0, 2.0, false)]
    #[case(3.0, 3.0, false)]
    #[case(0.0, 3.0, false)]
    #[case(-1.0, 3.0, false)]
    #[case(1.0, f64::INFINITY, false)]
    fn test_stability(#[case] lambda: f64, #[case] mu: f64, #[case] stable: bool) {
        assert_eq!(QueueInput::new(lambda, mu).is_stable(), stable);
    }

    #[test]
    fn test_unstable_error() {
        let err = QueueInput::new(3.0, 2.0).validate().unwrap_err();
        assert!(matches!(
            err,
            OrError::UnstableQueue { arrival_rate, service_rate }
                if arrival_rate == 3.0 && service_rate == 2.0
        ));
    }
}
