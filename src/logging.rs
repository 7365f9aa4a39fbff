//! Diagnostic logging setup.
//!
//! Structured `tracing` output goes to stderr so it never mixes with the
//! SBOM document on stdout. User-facing progress is separate; see
//! [`ProgressReporter`](crate::ports::outbound::ProgressReporter).

use tracing_subscriber::EnvFilter;

/// Level used when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Picks the filter: `--verbose`, then `RUST_LOG`, then the config file's
/// `log_level`, then [`DEFAULT_LOG_LEVEL`].
pub fn build_filter(verbose: bool, config_level: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }
    config_level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool, config_level: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, config_level))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .try_init();
}
