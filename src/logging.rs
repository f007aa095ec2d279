// =============================================================================
// Logging
// =============================================================================
//
// Structured logs go to stderr so stdout carries only the report. `RUST_LOG`
// overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. A no-data run logs its cause below
/// this level, so the user sees only the one diagnostic line.
pub const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}
