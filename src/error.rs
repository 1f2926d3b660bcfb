//! Error types for Barrido
//!
//! Fatal-only taxonomy: a sweep either completes or aborts. Rows already
//! appended to the metrics log before an abort remain valid partial results.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Barrido error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid sweep configuration (detected before any trial runs)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The external trainer failed during cross-validation
    #[error("Training error: {0}\nThe sweep run is aborted; rows already written remain valid")]
    Training(String),

    /// IO error (metrics log open/append)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Metrics row serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
