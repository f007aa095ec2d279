// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Arithmetic mean of the trailing `period` values. Undefined (NaN) until a full
// window is available.
// =============================================================================

/// SMA evaluated at the most recent value only.
///
/// Returns `NaN` when fewer than `period` values exist.
pub fn latest_sma(values: &[f64], period: usize) -> f64 {
    if period == 0 || values.len() < period {
        return f64::NAN;
    }
    window_mean(&values[values.len() - period..])
}

fn window_mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_insufficient_data_is_nan() {
        assert!(latest_sma(&[1.0, 2.0, 3.0], 5).is_nan());
    }

    #[test]
    fn sma_period_zero_is_nan() {
        assert!(latest_sma(&[1.0, 2.0], 0).is_nan());
    }

    #[test]
    fn sma_uses_trailing_window() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((latest_sma(&values, 3) - 4.0).abs() < 1e-12);
        assert!((latest_sma(&values, 5) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn sma200_matches_trailing_mean() {
        let closes: Vec<f64> = (0..260)
            .map(|i| 100.0 + (i as f64 * 0.37).sin() * 12.0 + i as f64 * 0.05)
            .collect();
        let expected: f64 = closes[60..].iter().sum::<f64>() / 200.0;
        let sma = latest_sma(&closes, 200);
        assert!(((sma - expected) / expected).abs() < 1e-9);
    }

    #[test]
    fn sma_linear_series_matches_closed_form() {
        // close_i = a + b*i  =>  SMA_w at index n-1 = a + b*(n-1 - (w-1)/2)
        let (a, b) = (50.0, 0.5);
        let n = 300;
        let closes: Vec<f64> = (0..n).map(|i| a + b * i as f64).collect();
        for w in [50usize, 200] {
            let expected = a + b * ((n - 1) as f64 - (w - 1) as f64 / 2.0);
            assert!((latest_sma(&closes, w) - expected).abs() < 1e-9);
        }
    }
}
