//! Error types for the ambient tooling around the filter engine
//!
//! The filtering path itself never fails. These errors only come from
//! loading configuration files, decoding recorded event streams and
//! writing replay output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or replaying input streams
#[derive(Error, Debug)]
pub enum StabilizerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Truncated event stream: {trailing} trailing bytes (event size {event_size})")]
    TruncatedStream { trailing: usize, event_size: usize },

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for loading and replay operations
pub type StabilizerResult<T> = Result<T, StabilizerError>;
