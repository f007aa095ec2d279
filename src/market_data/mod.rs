pub mod bars;
pub mod yahoo;

use anyhow::Result;

// Re-export the bar types for convenient access (e.g. `use crate::market_data::PriceSeries`).
pub use bars::{PriceBar, PriceBarSeries, PriceSeries};
pub use yahoo::YahooClient;

/// Source of daily bars for a single instrument.
///
/// `period` is a lookback such as `"1y"`. An `Ok` series may be empty when the
/// source knows the request but has no rows for it.
#[allow(async_fn_in_trait)]
pub trait PriceProvider {
    async fn fetch(&self, ticker: &str, period: &str) -> Result<PriceBarSeries>;
}
