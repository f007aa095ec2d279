// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1: Compute price changes (deltas) from consecutive closes. The first
//          bar has no predecessor and contributes a zero delta.
// Step 2: Split deltas into gains (positive part) and losses (negative part).
// Step 3: Smooth both with alpha = 1 / period, seeded at the first bar:
//            avg_t = avg_{t-1} + (x_t - avg_{t-1}) / period
//          Values are undefined until `period` bars have been folded in.
// Step 4: RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//          When avg_loss is zero RSI is 100 (this includes a perfectly flat
//          series, where both averages are zero).
// =============================================================================

use super::ema::exponential_smoothing;

pub const DEFAULT_PERIOD: usize = 14;

/// Compute the full RSI series for the given `closes` and `period`.
///
/// The output is index-aligned with `closes`; the first `period - 1` entries
/// are `NaN`. `period == 0` yields an all-`NaN` series.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<f64> {
    if period == 0 {
        return vec![f64::NAN; closes.len()];
    }

    // --- Gains / losses per bar ----------------------------------------------
    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());
    for i in 0..closes.len() {
        let delta = if i == 0 { 0.0 } else { closes[i] - closes[i - 1] };
        gains.push(if delta > 0.0 { delta } else { 0.0 });
        losses.push(if delta < 0.0 { -delta } else { 0.0 });
    }

    // --- Wilder's smoothing --------------------------------------------------
    let alpha = 1.0 / period as f64;
    let avg_gain = exponential_smoothing(&gains, alpha, period);
    let avg_loss = exponential_smoothing(&losses, alpha, period);

    avg_gain
        .iter()
        .zip(avg_loss.iter())
        .map(|(&g, &l)| rsi_from_averages(g, l))
        .collect()
}

/// RSI at the most recent bar, `NaN` when undefined.
pub fn current_rsi(closes: &[f64], period: usize) -> f64 {
    calculate_rsi(closes, period)
        .last()
        .copied()
        .unwrap_or(f64::NAN)
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_gain.is_nan() || avg_loss.is_nan() {
        f64::NAN
    } else if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_empty_input() {
        assert!(calculate_rsi(&[], 14).is_empty());
        assert!(current_rsi(&[], 14).is_nan());
    }

    #[test]
    fn rsi_period_zero() {
        assert!(calculate_rsi(&[1.0, 2.0, 3.0], 0).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn rsi_warm_up() {
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert!(current_rsi(&closes[..13], 14).is_nan());
        assert!(current_rsi(&closes, 14).is_finite());
    }

    #[test]
    fn rsi_all_gains() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let series = calculate_rsi(&closes, 14);
        for &v in &series[13..] {
            assert!((v - 100.0).abs() < 1e-10, "expected 100.0, got {v}");
        }
    }

    #[test]
    fn rsi_all_losses() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let series = calculate_rsi(&closes, 14);
        for &v in &series[13..] {
            assert!(v.abs() < 1e-10, "expected 0.0, got {v}");
        }
    }

    #[test]
    fn rsi_flat_market_reports_100() {
        // No losses at all, so the zero-loss convention applies.
        let closes = vec![100.0; 30];
        assert_eq!(current_rsi(&closes, 14), 100.0);
    }

    #[test]
    fn rsi_range_check() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        for &v in calculate_rsi(&closes, 14).iter().filter(|v| !v.is_nan()) {
            assert!((0.0..=100.0).contains(&v), "RSI {v} out of range");
        }
    }

    #[test]
    fn rsi_range_on_oscillating_series() {
        let closes: Vec<f64> = (0..400)
            .map(|i| 100.0 + (i as f64 * 0.13).sin() * 15.0 + (i as f64 * 0.71).cos() * 3.0)
            .collect();
        for &v in calculate_rsi(&closes, 14).iter().skip(13) {
            assert!((0.0..=100.0).contains(&v), "RSI {v} out of range");
        }
    }

    #[test]
    fn rsi_matches_manual_recursion() {
        let closes: Vec<f64> = vec![10.0, 11.0, 10.5, 10.8, 10.2, 10.9, 11.4, 11.1];
        let period = 3;
        let alpha = 1.0 / period as f64;
        let (mut g, mut l) = (0.0_f64, 0.0_f64);
        for w in closes.windows(2) {
            let d = w[1] - w[0];
            g += alpha * (d.max(0.0) - g);
            l += alpha * ((-d).max(0.0) - l);
        }
        let expected = 100.0 - 100.0 / (1.0 + g / l);
        assert!((current_rsi(&closes, period) - expected).abs() < 1e-10);
    }
}
