//! 曲線取樣

/// 在 [start, stop] 間產生 `samples` 個等距取樣點
///
/// 最後一點恰為 `stop`；`samples == 1` 時只回傳 `start`。
pub fn linspace(start: f64, stop: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (samples - 1) as f64;
            (0..samples)
                .map(|i| {
                    if i == samples - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let points = linspace(0.0, 10.0, 11);

        assert_eq!(points.len(), 11);
        assert_eq!(points[0], 0.0);
        assert_eq!(points[5], 5.0);
        assert_eq!(points[10], 10.0);
    }

    #[test]
    fn test_linspace_exact_stop() {
        let stop = 2.0 * 50_000f64.sqrt();
        let points = linspace(1.0, stop, 100);

        assert_eq!(points.len(), 100);
        assert_eq!(*points.last().unwrap(), stop);
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 0.0, 3), vec![0.0, 0.0, 0.0]);
    }
}
