// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators behind the report.
// Every function returns plain `f64` values where `NaN` marks "not enough
// history", so a short series degrades one indicator at a time instead of
// aborting the whole report.

pub mod adx;
pub mod bollinger;
pub mod ema;
pub mod extrema;
pub mod macd;
pub mod rsi;
pub mod sma;
