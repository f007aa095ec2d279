// =============================================================================
// ta-report — Main Entry Point
// =============================================================================
//
// Fetches one year (by default) of daily bars for a single ticker, evaluates
// the trend / momentum / volatility indicators and prints a text report.
// Logs go to stderr; stdout carries only the report.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod analysis;
mod classifier;
mod config;
mod indicators;
mod logging;
mod market_data;
mod pipeline;
mod report;
mod types;

use std::io::Write;
use std::process::ExitCode;

use tracing::info;

use crate::config::ReportConfig;
use crate::market_data::YahooClient;
use crate::pipeline::RunOutcome;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // ── 1. Environment & logging ─────────────────────────────────────────
    let _ = dotenv::dotenv();

    logging::init();

    // ── 2. Configuration ─────────────────────────────────────────────────
    let config = ReportConfig::resolve()?;
    info!(ticker = %config.ticker, period = %config.period, "configuration resolved");

    // ── 3. Provider ──────────────────────────────────────────────────────
    let provider = YahooClient::new()?;

    // ── 4. Run ───────────────────────────────────────────────────────────
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = pipeline::run(&config, &provider, &mut out).await?;
    out.flush()?;

    Ok(match outcome {
        RunOutcome::Reported => ExitCode::SUCCESS,
        RunOutcome::NoData => ExitCode::FAILURE,
    })
}
