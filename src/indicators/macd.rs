// =============================================================================
// Moving Average Convergence / Divergence (MACD)
// =============================================================================
//
//   MACD line  = EMA(fast) - EMA(slow)
//   Signal     = EMA(signal) of the MACD line
//   Histogram  = MACD line - Signal
//
// The signal EMA starts at the first defined MACD value, so with the default
// 12/26/9 periods the histogram is defined from the 34th bar onward.
// =============================================================================

use super::ema::calculate_ema;

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

/// MACD components evaluated at the most recent bar.
#[derive(Debug, Clone, Copy)]
pub struct MacdResult {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Compute the MACD line, signal and histogram at the latest bar.
///
/// Every field is `NaN` when the series is too short for it.
pub fn calculate_macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdResult {
    let line = macd_line(closes, fast, slow);
    let signal_series = calculate_ema(&line, signal);

    let macd = line.last().copied().unwrap_or(f64::NAN);
    let signal = signal_series.last().copied().unwrap_or(f64::NAN);

    MacdResult {
        macd,
        signal,
        histogram: macd - signal,
    }
}

/// MACD with the conventional 12 / 26 / 9 periods.
pub fn calculate_macd_default(closes: &[f64]) -> MacdResult {
    calculate_macd(closes, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL)
}

fn macd_line(closes: &[f64], fast: usize, slow: usize) -> Vec<f64> {
    let fast_ema = calculate_ema(closes, fast);
    let slow_ema = calculate_ema(closes, slow);
    fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect()
}
