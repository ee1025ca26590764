//! Utilities for logging.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Configure the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` directives override `default_level`. Safe to call once per
/// process; later calls are ignored.
pub fn configure_global_logger(default_level: tracing::Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
