//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initialize tracing for the process.
///
/// `RUST_LOG` wins over `logging.level`. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime);

    let _ = if config.json {
        builder.json().with_target(false).try_init()
    } else {
        builder.with_target(true).try_init()
    };
}
