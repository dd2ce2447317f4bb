use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::LoggingError;

const DEFAULT_FILTER: &str = "info";

/// Pick the stderr filter: an explicit `--log-level` wins, then `RUST_LOG`,
/// then the default level.
fn build_filter(log_level: Option<&str>) -> Result<EnvFilter, LoggingError> {
    match log_level {
        Some(level) => EnvFilter::try_new(level).map_err(|source| LoggingError::InvalidFilter {
            filter: level.to_string(),
            source,
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Initialize logging to stderr. Stdout carries the LSP transport and must
/// stay free of log output.
pub fn init_logger(no_color: bool, log_level: Option<&str>) -> Result<(), LoggingError> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_filter(build_filter(log_level)?);

    tracing_subscriber::registry().with(stderr_layer).try_init()?;
    Ok(())
}
