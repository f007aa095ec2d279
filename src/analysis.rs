// =============================================================================
// Indicator snapshot
// =============================================================================
//
// Evaluates every indicator of the report at the most recent bar. Values that
// need more history than the series holds come out as NaN; the rest of the
// snapshot is unaffected.

use serde::Serialize;
use tracing::debug;

use crate::indicators::{adx, bollinger, extrema, macd, rsi, sma};
use crate::market_data::PriceSeries;

pub const SMA_SHORT_PERIOD: usize = 50;
pub const SMA_LONG_PERIOD: usize = 200;

/// Latest indicator values for one instrument.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSnapshot {
    pub current_price: f64,
    pub all_time_high: f64,
    /// `(current / ATH - 1) * 100`.
    pub distance_to_ath_pct: f64,

    pub sma_50: f64,
    pub sma_200: f64,

    pub macd_line: f64,
    pub macd_signal: f64,
    pub macd_diff: f64,

    pub adx: f64,

    pub bollinger_upper: f64,
    pub bollinger_middle: f64,
    pub bollinger_lower: f64,

    pub rsi: f64,

    pub resistance_short: f64,
    pub support_short: f64,
    pub resistance_medium: f64,
    pub support_medium: f64,
}

impl IndicatorSnapshot {
    /// Compute the snapshot from an extracted price series.
    pub fn compute(prices: &PriceSeries) -> Self {
        let close = prices.close();
        let high = prices.high();
        let low = prices.low();

        let current_price = prices.last_close();
        let all_time_high = extrema::all_time_high(close);
        let distance_to_ath_pct = (current_price / all_time_high - 1.0) * 100.0;

        let macd = macd::calculate_macd_default(close);
        let bands = bollinger::calculate_bollinger_default(close);

        let snapshot = Self {
            current_price,
            all_time_high,
            distance_to_ath_pct,
            sma_50: sma::latest_sma(close, SMA_SHORT_PERIOD),
            sma_200: sma::latest_sma(close, SMA_LONG_PERIOD),
            macd_line: macd.macd,
            macd_signal: macd.signal,
            macd_diff: macd.histogram,
            adx: adx::calculate_adx_default(high, low, close),
            bollinger_upper: bands.upper,
            bollinger_middle: bands.middle,
            bollinger_lower: bands.lower,
            rsi: rsi::current_rsi(close, rsi::DEFAULT_PERIOD),
            resistance_short: extrema::trailing_high(high, extrema::SHORT_TERM_LOOKBACK),
            support_short: extrema::trailing_low(low, extrema::SHORT_TERM_LOOKBACK),
            resistance_medium: extrema::trailing_high(high, extrema::MEDIUM_TERM_LOOKBACK),
            support_medium: extrema::trailing_low(low, extrema::MEDIUM_TERM_LOOKBACK),
        };

        if prices.len() < SMA_LONG_PERIOD {
            debug!(
                bars = prices.len(),
                needed = SMA_LONG_PERIOD,
                "short history: long-window indicators are undefined"
            );
        }

        snapshot
    }
}
