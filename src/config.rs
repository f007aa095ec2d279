// =============================================================================
// Report configuration
// =============================================================================
//
// The run has exactly two inputs: the instrument ticker and the lookback
// period. They are resolved once at startup, in increasing precedence:
//
//   1. built-in defaults (NVDA over 1y)
//   2. an optional JSON file (`report_config.json`, or `$TA_REPORT_CONFIG`)
//   3. `TA_REPORT_TICKER` / `TA_REPORT_PERIOD` environment variables
//
// The resolved value is validated and then passed by reference; nothing
// mutates it afterwards.
// =============================================================================

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "report_config.json";

pub const ENV_CONFIG_PATH: &str = "TA_REPORT_CONFIG";
pub const ENV_TICKER: &str = "TA_REPORT_TICKER";
pub const ENV_PERIOD: &str = "TA_REPORT_PERIOD";

/// Lookbacks the data provider understands.
pub const VALID_PERIODS: &[&str] = &[
    "1d", "5d", "1mo", "3mo", "6mo", "1y", "2y", "5y", "10y", "ytd", "max",
];

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_ticker() -> String {
    "NVDA".to_string()
}

fn default_period() -> String {
    "1y".to_string()
}

// =============================================================================
// ReportConfig
// =============================================================================

/// Instrument and lookback for one report run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Ticker symbol, e.g. `NVDA` or `SAN.MC`.
    #[serde(default = "default_ticker")]
    pub ticker: String,

    /// Lookback window, one of [`VALID_PERIODS`].
    #[serde(default = "default_period")]
    pub period: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            ticker: default_ticker(),
            period: default_period(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse report config from {}", path.display()))?;

        info!(
            path = %path.display(),
            ticker = %config.ticker,
            period = %config.period,
            "report config loaded"
        );

        Ok(config)
    }

    /// Resolve the configuration from file and process environment.
    pub fn resolve() -> Result<Self> {
        let path = std::env::var(ENV_CONFIG_PATH).ok();
        Self::resolve_with(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Resolution with an injectable environment lookup.
    ///
    /// An explicitly named config file must load; the default file is optional.
    fn resolve_with(
        explicit_path: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::load(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
                    warn!(error = %e, "Failed to load config, using defaults");
                    Self::default()
                })
            }
            None => {
                debug!("no config file, using defaults");
                Self::default()
            }
        };

        if let Some(ticker) = env(ENV_TICKER) {
            config.ticker = ticker;
        }
        if let Some(period) = env(ENV_PERIOD) {
            config.period = period;
        }

        config.normalized()
    }

    /// Trim and case-fold the inputs, rejecting values the provider cannot
    /// serve.
    pub fn normalized(self) -> Result<Self> {
        let ticker = self.ticker.trim().to_uppercase();
        let period = self.period.trim().to_lowercase();

        if ticker.is_empty() {
            bail!("ticker must not be empty");
        }
        if !VALID_PERIODS.contains(&period.as_str()) {
            bail!(
                "unsupported period {:?}; expected one of {}",
                period,
                VALID_PERIODS.join(", ")
            );
        }

        Ok(Self { ticker, period })
    }
}
