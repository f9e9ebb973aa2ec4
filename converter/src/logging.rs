use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Logs go to stderr so that stdout only carries the report.
/// Verbosity is read from `RUST_LOG`, e.g. `RUST_LOG=apy_rate=debug`.
#[mutants::skip]
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Errors only when a global subscriber is already set
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
