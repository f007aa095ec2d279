// =============================================================================
// Report pipeline
// =============================================================================
//
//   fetch -> extract -> compute -> classify -> format
//
// A provider failure and an empty series are the same terminal condition:
// one diagnostic line is written and nothing else is computed. The cause is
// logged at `info`, below the default filter.
// =============================================================================

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::analysis::IndicatorSnapshot;
use crate::classifier::Classification;
use crate::config::ReportConfig;
use crate::market_data::{PriceProvider, PriceSeries};
use crate::report::{self, ReportHeader};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The full report was written.
    Reported,
    /// No usable data; only the diagnostic line was written.
    NoData,
}

/// Run one report for `config`, writing all user-facing output to `out`.
pub async fn run<P, W>(config: &ReportConfig, provider: &P, out: &mut W) -> Result<RunOutcome>
where
    P: PriceProvider,
    W: Write,
{
    info!(ticker = %config.ticker, period = %config.period, "fetching price history");

    let series = match provider.fetch(&config.ticker, &config.period).await {
        Ok(series) => series,
        Err(e) => {
            info!(ticker = %config.ticker, error = %format!("{e:#}"), "price history unavailable");
            return write_no_data(config, out);
        }
    };

    let prices = match PriceSeries::extract(&series) {
        Ok(prices) => prices,
        Err(e) => {
            info!(ticker = %config.ticker, error = %e, "price history unavailable");
            return write_no_data(config, out);
        }
    };

    let snapshot = IndicatorSnapshot::compute(&prices);
    let labels = Classification::from_snapshot(&snapshot);

    debug!(
        bars = prices.len(),
        snapshot = %serde_json::to_string(&snapshot).unwrap_or_default(),
        labels = %serde_json::to_string(&labels).unwrap_or_default(),
        "analysis complete"
    );

    let header = ReportHeader {
        symbol: &series.symbol,
        currency: &series.currency,
        as_of: series.last_date(),
    };
    report::write_report(out, &header, &snapshot, &labels).context("failed to write report")?;

    Ok(RunOutcome::Reported)
}

fn write_no_data<W: Write>(config: &ReportConfig, out: &mut W) -> Result<RunOutcome> {
    writeln!(out, "{}", report::no_data_message(&config.ticker))
        .context("failed to write diagnostic")?;
    Ok(RunOutcome::NoData)
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging;
    use crate::market_data::{PriceBar, PriceBarSeries};
    use anyhow::bail;
    use chrono::{Duration, NaiveDate};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::EnvFilter;

    /// In-memory provider returning a fixed series or a fixed failure.
    struct StaticProvider {
        bars: Option<Vec<PriceBar>>,
    }

    impl PriceProvider for StaticProvider {
        async fn fetch(&self, ticker: &str, _period: &str) -> Result<PriceBarSeries> {
            match &self.bars {
                Some(bars) => Ok(PriceBarSeries {
                    symbol: ticker.to_string(),
                    currency: "USD".into(),
                    bars: bars.clone(),
                }),
                None => bail!("connection refused"),
            }
        }
    }

    fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                date: start + Duration::days(i as i64),
                open: close,
                high: close + 0.5,
                low: close - 0.5,
                close,
            })
            .collect()
    }

    fn config() -> ReportConfig {
        ReportConfig {
            ticker: "TEST".into(),
            period: "1y".into(),
        }
    }

    async fn run_with(provider: StaticProvider) -> (RunOutcome, String) {
        let mut out = Vec::new();
        let outcome = run(&config(), &provider, &mut out).await.unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn empty_series_prints_single_diagnostic() {
        let (outcome, text) = run_with(StaticProvider { bars: Some(Vec::new()) }).await;
        assert_eq!(outcome, RunOutcome::NoData);
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.trim_end(), report::no_data_message("TEST"));
        assert!(!text.contains("REPORT"));
    }

    #[tokio::test]
    async fn provider_failure_is_treated_as_no_data() {
        let (outcome, text) = run_with(StaticProvider { bars: None }).await;
        assert_eq!(outcome, RunOutcome::NoData);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Could not download data for TEST."));
    }

    /// Log sink shared between the subscriber and the assertions.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run against `provider` with logs filtered by `filter`, returning the
    /// captured log text.
    async fn logs_for_no_data_run(provider: StaticProvider, filter: &str) -> String {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (outcome, text) = run_with(provider).await;
        assert_eq!(outcome, RunOutcome::NoData);
        assert_eq!(text.lines().count(), 1);
        logs.text()
    }

    #[tokio::test]
    async fn no_data_cause_is_hidden_at_default_log_level() {
        let failing =
            logs_for_no_data_run(StaticProvider { bars: None }, logging::DEFAULT_FILTER).await;
        assert!(failing.is_empty(), "unexpected log output: {failing}");

        let empty = logs_for_no_data_run(
            StaticProvider { bars: Some(Vec::new()) },
            logging::DEFAULT_FILTER,
        )
        .await;
        assert!(empty.is_empty(), "unexpected log output: {empty}");
    }

    #[tokio::test]
    async fn no_data_cause_is_logged_at_info() {
        let logs = logs_for_no_data_run(StaticProvider { bars: None }, "info").await;
        assert!(logs.contains("price history unavailable"));
        assert!(logs.contains("connection refused"));
    }

    #[tokio::test]
    async fn flat_series_full_report() {
        let bars = bars_from_closes(&vec![100.0; 300]);
        let (outcome, text) = run_with(StaticProvider { bars: Some(bars) }).await;

        assert_eq!(outcome, RunOutcome::Reported);
        assert!(text.contains("REPORT: TEST (USD) as of 2024-10-26"));
        assert!(text.contains("SMA 50:            100.00 $"));
        assert!(text.contains("SMA 200:           100.00 $"));
        assert!(text.contains("Base trend:        bearish (long-term)"));
        assert!(text.contains("MACD signal:       bearish"));
        assert!(text.contains("RSI value:         100.00"));
        assert!(text.contains("State:             overbought"));
    }

    #[tokio::test]
    async fn short_series_still_renders_every_section() {
        let closes: Vec<f64> = (0..30).map(|i| 50.0 + (i as f64 * 0.4).sin() * 3.0).collect();
        let (outcome, text) = run_with(StaticProvider {
            bars: Some(bars_from_closes(&closes)),
        })
        .await;

        assert_eq!(outcome, RunOutcome::Reported);
        assert!(text.contains("SMA 200:           nan $"));
        for section in [
            "1. TREND & MOMENTUM:",
            "2. DYNAMIC LEVELS (Bollinger):",
            "3. STATIC LEVELS:",
            "4. STRENGTH (RSI):",
        ] {
            assert!(text.contains(section), "missing section {section}");
        }
    }

    #[tokio::test]
    async fn uptrend_report_labels() {
        let closes: Vec<f64> = (0..260).map(|i| 100.0 + i as f64).collect();
        let (_, text) = run_with(StaticProvider {
            bars: Some(bars_from_closes(&closes)),
        })
        .await;
        assert!(text.contains("Base trend:        bullish (long-term)"));
        assert!(text.contains("-> strong"));
        assert!(text.contains("Distance to ATH:   0.00 %"));
    }
}
