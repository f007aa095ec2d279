// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ). σ is the population standard deviation of the
// same trailing window.
//
// The report uses the bands as dynamic support / resistance levels.

pub const DEFAULT_PERIOD: usize = 20;
pub const DEFAULT_NUM_STD: f64 = 2.0;

/// Result of a Bollinger Band calculation at the latest bar.
#[derive(Debug, Clone, Copy)]
pub struct BollingerResult {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerResult {
    fn undefined() -> Self {
        Self {
            upper: f64::NAN,
            middle: f64::NAN,
            lower: f64::NAN,
        }
    }
}

/// Calculate Bollinger Bands over the trailing `period` closing prices.
///
/// - `upper`  = SMA + `num_std` * σ
/// - `middle` = SMA
/// - `lower`  = SMA - `num_std` * σ
///
/// All three bands are `NaN` when fewer than `period` data points exist.
pub fn calculate_bollinger(closes: &[f64], period: usize, num_std: f64) -> BollingerResult {
    if period == 0 || closes.len() < period {
        return BollingerResult::undefined();
    }

    let window = &closes[closes.len() - period..];
    let sum: f64 = window.iter().sum();
    let middle = sum / period as f64;

    let variance = window.iter().map(|x| (x - middle).powi(2)).sum::<f64>() / period as f64;
    let std_dev = variance.sqrt();

    BollingerResult {
        upper: middle + num_std * std_dev,
        middle,
        lower: middle - num_std * std_dev,
    }
}

/// Bollinger Bands with the conventional 20-bar, 2σ parameters.
pub fn calculate_bollinger_default(closes: &[f64]) -> BollingerResult {
    calculate_bollinger(closes, DEFAULT_PERIOD, DEFAULT_NUM_STD)
}
