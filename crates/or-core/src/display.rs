//! 顯示用數值格式化

use rust_decimal::prelude::*;

/// 將浮點結果捨入為指定小數位數的 Decimal（供呈現層顯示）
///
/// 非有限值無法表示，回傳 `None`。
pub fn round_for_display(value: f64, decimals: u32) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_round_for_display() {
        let eoq = 50_000f64.sqrt();
        assert_eq!(
            round_for_display(eoq, 2),
            Some(Decimal::from_str("223.61").unwrap())
        );

        assert_eq!(
            round_for_display(10_000.0 / 30.0, 2),
            Some(Decimal::from_str("333.33").unwrap())
        );

        assert_eq!(round_for_display(3000.0, 2), Some(Decimal::from(3000)));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(round_for_display(f64::NAN, 2), None);
        assert_eq!(round_for_display(f64::INFINITY, 2), None);
    }
}
