//! 參數掃描（批次並行計算）
//!
//! 每次計算皆為獨立請求，不共享狀態，因此可直接以 rayon 並行。

use or_core::{BreakEvenInput, BreakEvenResult, QueueInput, QueueResult};
use rayon::prelude::*;

use crate::{BreakEvenModel, QueueModel};

/// 並行計算一批獨立輸入，結果順序與輸入相同
pub fn evaluate_batch<I, O, F>(inputs: &[I], model: F) -> Vec<O>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> O + Sync + Send,
{
    tracing::debug!("批次計算 {} 組輸入", inputs.len());
    inputs.par_iter().map(model).collect()
}

/// 固定服務率，掃描到達率
pub fn queue_over_arrival_rates(
    service_rate: f64,
    arrival_rates: &[f64],
) -> Vec<(f64, or_core::Result<QueueResult>)> {
    evaluate_batch(arrival_rates, |&lambda| {
        (lambda, QueueModel::compute(&QueueInput::new(lambda, service_rate)))
    })
}

/// 固定成本結構，掃描售價
pub fn break_even_over_prices(
    fixed_cost: f64,
    variable_cost_per_unit: f64,
    prices: &[f64],
) -> Vec<(f64, or_core::Result<BreakEvenResult>)> {
    evaluate_batch(prices, |&price| {
        let input = BreakEvenInput::new(fixed_cost, variable_cost_per_unit, price);
        (price, BreakEvenModel::compute(&input))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InventoryModel;
    use or_core::EoqInput;

    #[test]
    fn test_batch_preserves_order() {
        let inputs: Vec<f64> = (1..=50).map(f64::from).collect();
        let outputs = evaluate_batch(&inputs, |x| x * 2.0);

        assert_eq!(outputs.len(), 50);
        assert!(outputs.iter().zip(&inputs).all(|(o, i)| *o == i * 2.0));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let inputs: Vec<EoqInput> = (1..=20)
            .map(|i| EoqInput::new(100.0 * i as f64, 50.0, 2.0))
            .collect();

        let parallel = evaluate_batch(&inputs, |input| InventoryModel::compute(input).unwrap());
        let sequential: Vec<_> = inputs
            .iter()
            .map(|input| InventoryModel::compute(input).unwrap())
            .collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_queue_sweep_marks_unstable_rates() {
        let results = queue_over_arrival_rates(3.0, &[1.0, 2.0, 3.0, 4.0]);

        assert_eq!(results.len(), 4);
        assert!(results[0].1.is_ok());
        assert!(results[1].1.is_ok());
        assert!(results[2].1.is_err());
        assert!(results[3].1.is_err());

        // 到達率越高，排隊越長
        let lq1 = results[0].1.as_ref().unwrap().avg_queue_length;
        let lq2 = results[1].1.as_ref().unwrap().avg_queue_length;
        assert!(lq1 < lq2);
    }

    #[test]
    fn test_break_even_sweep() {
        let results = break_even_over_prices(10_000.0, 20.0, &[15.0, 40.0, 50.0]);

        assert!(results[0].1.is_err());
        assert_eq!(results[1].1.as_ref().unwrap().break_even_quantity, 500.0);
        assert!((results[2].1.as_ref().unwrap().break_even_quantity - 333.3333).abs() < 1e-3);
    }
}
