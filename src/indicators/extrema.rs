// =============================================================================
// Price extremes
// =============================================================================
//
// All-time high over the available history and trailing highs / lows used as
// static support and resistance. `NaN` entries are ignored; a window with no
// defined value yields `NaN`.

/// Trailing window for short-term levels (about one trading month).
pub const SHORT_TERM_LOOKBACK: usize = 21;
/// Trailing window for medium-term levels (about three trading months).
pub const MEDIUM_TERM_LOOKBACK: usize = 63;

/// Highest value over the whole series.
pub fn all_time_high(values: &[f64]) -> f64 {
    fold_defined(values, f64::max)
}

/// Highest value over the trailing `lookback` entries, or the whole series
/// when it is shorter than `lookback`.
pub fn trailing_high(values: &[f64], lookback: usize) -> f64 {
    fold_defined(tail(values, lookback), f64::max)
}

/// Lowest value over the trailing `lookback` entries, or the whole series
/// when it is shorter than `lookback`.
pub fn trailing_low(values: &[f64], lookback: usize) -> f64 {
    fold_defined(tail(values, lookback), f64::min)
}

fn tail(values: &[f64], lookback: usize) -> &[f64] {
    &values[values.len().saturating_sub(lookback)..]
}

fn fold_defined(values: &[f64], pick: fn(f64, f64) -> f64) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(pick)
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_time_high_ignores_nan() {
        assert_eq!(all_time_high(&[3.0, f64::NAN, 7.5, 2.0]), 7.5);
        assert!(all_time_high(&[]).is_nan());
        assert!(all_time_high(&[f64::NAN]).is_nan());
    }

    #[test]
    fn trailing_window_only_sees_recent_values() {
        let mut highs = vec![500.0];
        highs.extend((0..21).map(|i| 100.0 + i as f64));
        assert_eq!(trailing_high(&highs, SHORT_TERM_LOOKBACK), 120.0);
        assert_eq!(trailing_high(&highs, MEDIUM_TERM_LOOKBACK), 500.0);
    }

    #[test]
    fn trailing_low_short_series_uses_everything() {
        let lows = vec![9.0, 4.0, 6.0];
        assert_eq!(trailing_low(&lows, SHORT_TERM_LOOKBACK), 4.0);
        assert_eq!(trailing_low(&lows, 2), 4.0);
        assert_eq!(trailing_low(&lows, 1), 6.0);
    }
}
