//! Error types for ledger-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while setting up the CLI
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Log filter directive rejected
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed
    #[error("Cannot install log subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}
