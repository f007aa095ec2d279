use anyhow::{bail, Result};
use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// A single daily OHLC bar.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Daily bars for one instrument in ascending date order, as returned by a
/// [`PriceProvider`](super::PriceProvider).
#[derive(Debug, Clone)]
pub struct PriceBarSeries {
    pub symbol: String,
    pub currency: String,
    pub bars: Vec<PriceBar>,
}

impl PriceBarSeries {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Date of the most recent bar, if any.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }
}

// ---------------------------------------------------------------------------
// PriceSeries -- the three aligned sequences the indicators consume
// ---------------------------------------------------------------------------

/// Close / high / low sequences extracted from a [`PriceBarSeries`].
///
/// All three vectors share the same length (at least 1) and index alignment.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    close: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
}

impl PriceSeries {
    /// Split a bar series into aligned close / high / low sequences.
    ///
    /// Fails when the series has no bars.
    pub fn extract(series: &PriceBarSeries) -> Result<Self> {
        if series.is_empty() {
            bail!("no price bars available for {}", series.symbol);
        }

        let close = series.bars.iter().map(|b| b.close).collect();
        let high = series.bars.iter().map(|b| b.high).collect();
        let low = series.bars.iter().map(|b| b.low).collect();

        Ok(Self { close, high, low })
    }

    pub fn close(&self) -> &[f64] {
        &self.close
    }

    pub fn high(&self) -> &[f64] {
        &self.high
    }

    pub fn low(&self) -> &[f64] {
        &self.low
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Most recent close.
    pub fn last_close(&self) -> f64 {
        // Non-empty by construction.
        self.close[self.close.len() - 1]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
