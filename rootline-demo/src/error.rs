use thiserror::Error;

use rootline_solve::{ConfigError, scan};

/// Errors that stop a demo run.
///
/// Failures on a single bracket are not here: they end up in the report.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("bracket scan failed: {0}")]
    Scan(#[from] scan::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to install logger: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, Error>;
