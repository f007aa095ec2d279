// =============================================================================
// Yahoo Finance chart API client (daily bars, split/dividend adjusted)
// =============================================================================
//
// One GET against /v8/finance/chart/{symbol} with `range` set to the requested
// lookback and a daily interval. Prices are auto-adjusted: when the response
// carries an adjusted close, open/high/low are scaled by adjclose / close and
// the close is replaced by the adjusted close.
// =============================================================================

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, NaiveDate};
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::bars::{PriceBar, PriceBarSeries};
use super::PriceProvider;

/// Public chart API host.
const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com";

/// The chart endpoint rejects requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Currency assumed when the response metadata omits one.
const FALLBACK_CURRENCY: &str = "USD";

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    symbol: Option<String>,
    currency: Option<String>,
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<QuoteColumns>,
    #[serde(default)]
    adjclose: Vec<AdjCloseColumn>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteColumns {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseColumn {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Daily-bar provider backed by the Yahoo Finance chart API.
#[derive(Clone)]
pub struct YahooClient {
    base_url: String,
    client: reqwest::Client,
}

impl YahooClient {
    /// Client against the public Yahoo endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternative host (e.g. a local mirror).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        let base_url = base_url.into();
        debug!(base_url = %base_url, "YahooClient initialised");

        Ok(Self { base_url, client })
    }

    /// Build the chart URL for `ticker` over `period`.
    fn chart_url(&self, ticker: &str, period: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid provider base URL {}", self.base_url))?;

        url.path_segments_mut()
            .map_err(|_| anyhow!("provider base URL {} cannot carry a path", self.base_url))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", ticker]);

        url.query_pairs_mut()
            .append_pair("range", period)
            .append_pair("interval", "1d")
            .append_pair("events", "div,split")
            .append_pair("includeAdjustedClose", "true");

        Ok(url)
    }
}

impl PriceProvider for YahooClient {
    /// GET /v8/finance/chart/{ticker}.
    #[instrument(skip(self), name = "yahoo::fetch")]
    async fn fetch(&self, ticker: &str, period: &str) -> Result<PriceBarSeries> {
        let url = self.chart_url(ticker, period)?;

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("GET /v8/finance/chart request failed")?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .context("failed to read chart response body")?;

        // Unknown symbols come back as 404 with an error payload, so try the
        // payload before falling back to the bare status.
        match parse_chart(&body, ticker) {
            Ok(series) if status.is_success() => {
                debug!(symbol = %series.symbol, bars = series.len(), "chart data retrieved");
                Ok(series)
            }
            Ok(_) => bail!("Yahoo chart API returned {status}"),
            Err(e) if status.is_success() => Err(e),
            Err(e) => Err(e.context(format!("Yahoo chart API returned {status}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a chart API payload into an adjusted daily bar series.
///
/// Rows with any missing OHLC field are dropped. A payload with no usable rows
/// yields an empty series rather than an error.
fn parse_chart(body: &str, ticker: &str) -> Result<PriceBarSeries> {
    let response: ChartResponse =
        serde_json::from_str(body).context("failed to parse chart JSON")?;

    if let Some(err) = response.chart.error {
        bail!("Yahoo chart API error [{}]: {}", err.code, err.description);
    }

    let result = response
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .context("chart response contains no result")?;

    let symbol = result.meta.symbol.unwrap_or_else(|| ticker.to_string());
    let currency = result
        .meta
        .currency
        .unwrap_or_else(|| FALLBACK_CURRENCY.to_string());

    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let adjclose = result
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|c| c.adjclose)
        .unwrap_or_default();

    let column = |col: &[Option<f64>], i: usize| col.get(i).copied().flatten();

    let mut bars = Vec::with_capacity(result.timestamp.len());
    let mut skipped = 0usize;

    for (i, &ts) in result.timestamp.iter().enumerate() {
        let (Some(open), Some(high), Some(low), Some(close)) = (
            column(&quote.open, i),
            column(&quote.high, i),
            column(&quote.low, i),
            column(&quote.close, i),
        ) else {
            skipped += 1;
            continue;
        };

        let Some(date) = exchange_date(ts, result.meta.gmtoffset) else {
            warn!(timestamp = ts, "timestamp out of range -- bar dropped");
            skipped += 1;
            continue;
        };

        let ratio = match column(&adjclose, i) {
            Some(adj) if close != 0.0 => adj / close,
            _ => 1.0,
        };

        bars.push(PriceBar {
            date,
            open: open * ratio,
            high: high * ratio,
            low: low * ratio,
            close: close * ratio,
        });
    }

    if skipped > 0 {
        debug!(symbol = %symbol, skipped, "incomplete rows dropped from chart data");
    }

    Ok(PriceBarSeries {
        symbol,
        currency,
        bars,
    })
}

/// Trading date of a bar timestamp in the exchange's local time.
fn exchange_date(timestamp: i64, gmtoffset: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp + gmtoffset, 0).map(|dt| dt.date_naive())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
