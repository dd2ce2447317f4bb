use thiserror::Error;

/// Errors raised while resolving a completion item
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The item carries no suggestion payload
    #[error("completion item `{0}` has no data")]
    MissingData(String),

    /// The payload is not a suggestion produced by this server
    #[error("invalid suggestion data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// Errors raised while setting up logging
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter `{filter}`: {source}")]
    InvalidFilter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}
