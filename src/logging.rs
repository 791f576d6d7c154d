use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter: `RUST_LOG` wins, then the given level.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// the rendered plan or JSON.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(level: &str) {
    let _ = fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
