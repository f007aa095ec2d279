// =============================================================================
// Threshold classifier
// =============================================================================
//
// Maps the latest indicator values to categorical labels.
//
//   trend     : SMA50 > SMA200                  => bullish, else bearish
//   macd      : histogram > 0                   => bullish, else bearish
//   strength  : ADX < 20 weak, < 30 moderate, otherwise strong
//   momentum  : RSI < 30 oversold, > 70 overbought, < 45 weak-selling, else neutral
//   zone      : price <= lower band support, >= upper band resistance, else neutral
//
// Each rule is an ordered if / else chain, so a NaN input falls through to the
// last branch of its rule.
// =============================================================================

use serde::Serialize;

use crate::analysis::IndicatorSnapshot;
use crate::types::{MacdSignal, MomentumState, PriceZone, TrendDirection, TrendStrength};

pub const ADX_WEAK_BELOW: f64 = 20.0;
pub const ADX_MODERATE_BELOW: f64 = 30.0;
pub const RSI_OVERSOLD_BELOW: f64 = 30.0;
pub const RSI_OVERBOUGHT_ABOVE: f64 = 70.0;
pub const RSI_WEAK_BELOW: f64 = 45.0;

/// Every label of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub trend: TrendDirection,
    pub macd: MacdSignal,
    pub strength: TrendStrength,
    pub momentum: MomentumState,
    pub zone: PriceZone,
}

impl Classification {
    pub fn from_snapshot(snapshot: &IndicatorSnapshot) -> Self {
        Self {
            trend: classify_trend(snapshot.sma_50, snapshot.sma_200),
            macd: classify_macd(snapshot.macd_diff),
            strength: classify_strength(snapshot.adx),
            momentum: classify_momentum(snapshot.rsi),
            zone: classify_zone(
                snapshot.current_price,
                snapshot.bollinger_lower,
                snapshot.bollinger_upper,
            ),
        }
    }
}

pub fn classify_trend(sma_short: f64, sma_long: f64) -> TrendDirection {
    if sma_short > sma_long {
        TrendDirection::Bullish
    } else {
        TrendDirection::Bearish
    }
}

pub fn classify_macd(macd_diff: f64) -> MacdSignal {
    if macd_diff > 0.0 {
        MacdSignal::Bullish
    } else {
        MacdSignal::Bearish
    }
}

pub fn classify_strength(adx: f64) -> TrendStrength {
    if adx < ADX_WEAK_BELOW {
        TrendStrength::Weak
    } else if adx < ADX_MODERATE_BELOW {
        TrendStrength::Moderate
    } else {
        TrendStrength::Strong
    }
}

pub fn classify_momentum(rsi: f64) -> MomentumState {
    if rsi < RSI_OVERSOLD_BELOW {
        MomentumState::Oversold
    } else if rsi > RSI_OVERBOUGHT_ABOVE {
        MomentumState::Overbought
    } else if rsi < RSI_WEAK_BELOW {
        MomentumState::WeakSelling
    } else {
        MomentumState::Neutral
    }
}

pub fn classify_zone(price: f64, lower_band: f64, upper_band: f64) -> PriceZone {
    if price <= lower_band {
        PriceZone::Support
    } else if price >= upper_band {
        PriceZone::Resistance
    } else {
        PriceZone::Neutral
    }
}
