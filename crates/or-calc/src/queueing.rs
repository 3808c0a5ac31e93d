//! M/M/1 單一伺服器排隊模型

use or_core::{ModelConfig, QueueInput, QueueResult, StateProbability};

/// M/M/1 排隊模型
pub struct QueueModel;

impl QueueModel {
    /// 以預設配置計算穩態指標
    pub fn compute(input: &QueueInput) -> or_core::Result<QueueResult> {
        Self::compute_with(input, &ModelConfig::default())
    }

    /// 計算穩態指標與系統人數分佈
    ///
    /// 僅在 0 < λ < μ 時有定義；否則回傳 [`or_core::OrError::UnstableQueue`]，
    /// 不產生任何部分結果。
    pub fn compute_with(input: &QueueInput, config: &ModelConfig) -> or_core::Result<QueueResult> {
        config.validate()?;
        if let Err(err) = input.validate() {
            tracing::warn!("排隊系統不穩定，不計算指標: {}", err);
            return Err(err);
        }

        let lambda = input.arrival_rate;
        let mu = input.service_rate;

        let rho = lambda / mu;
        let avg_queue_length = rho * rho / (1.0 - rho);
        let avg_wait_time = avg_queue_length / lambda;

        let states = u32::try_from(config.queue_states).unwrap_or(u32::MAX);
        let system_size_distribution = (1..=states)
            .map(|n| StateProbability {
                n,
                probability: Self::state_probability(rho, n),
            })
            .collect();

        let result = QueueResult {
            utilization: rho,
            avg_queue_length,
            avg_wait_time,
            idle_probability: 1.0 - rho,
            avg_system_length: rho / (1.0 - rho),
            avg_system_time: 1.0 / (mu - lambda),
            system_size_distribution,
        };

        tracing::debug!(
            "M/M/1: ρ = {:.4}, Lq = {:.4}, Wq = {:.4}",
            result.utilization,
            result.avg_queue_length,
            result.avg_wait_time
        );

        Ok(result)
    }

    /// P(n) = (1 - ρ) · ρ^n
    pub fn state_probability(rho: f64, n: u32) -> f64 {
        let power = match i32::try_from(n) {
            Ok(n) => rho.powi(n),
            Err(_) => rho.powf(f64::from(n)),
        };
        (1.0 - rho) * power
    }
}
