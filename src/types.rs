// =============================================================================
// Classification labels shared by the classifier and the report
// =============================================================================

use serde::Serialize;

/// Long-term trend from the SMA(50) / SMA(200) relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Bullish,
    Bearish,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "bullish (long-term)"),
            Self::Bearish => write!(f, "bearish (long-term)"),
        }
    }
}

/// Sign of the MACD histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MacdSignal {
    Bullish,
    Bearish,
}

impl std::fmt::Display for MacdSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "bullish"),
            Self::Bearish => write!(f, "bearish"),
        }
    }
}

/// Trend strength bucket derived from ADX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendStrength {
    Weak,
    Moderate,
    Strong,
}

impl std::fmt::Display for TrendStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weak => write!(f, "weak (sideways/no trend)"),
            Self::Moderate => write!(f, "moderate"),
            Self::Strong => write!(f, "strong"),
        }
    }
}

/// Momentum state derived from RSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MomentumState {
    Oversold,
    Overbought,
    WeakSelling,
    Neutral,
}

impl std::fmt::Display for MomentumState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oversold => write!(f, "oversold (possible rebound)"),
            Self::Overbought => write!(f, "overbought"),
            Self::WeakSelling => write!(f, "weak-selling (neutral-weak)"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Where the current price sits relative to the Bollinger Bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceZone {
    Support,
    Resistance,
    Neutral,
}

impl std::fmt::Display for PriceZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Support => write!(f, "support zone (cheap)"),
            Self::Resistance => write!(f, "resistance zone (expensive)"),
            Self::Neutral => write!(f, "neutral zone"),
        }
    }
}
