//! Error types for loading and provider queries.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for document-level configuration failures.
///
/// Individual malformed entries never produce this — they are skipped with a
/// warning and reported through the load report. Only a document that cannot
/// be processed at all (unreadable file, invalid JSON, wrong top-level shape)
/// fails the load.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read records config: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON.
    #[error("records config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed, but the top level is not a JSON object.
    #[error("records config must be a JSON object of record entries")]
    NotAnObject,
}

/// Error type for pack provider queries.
#[derive(Debug, Error)]
pub enum PackError {
    /// The queried path is not in the pack's path set and no fallback
    /// source could answer it.
    #[error("no such resource: {path}")]
    NotFound {
        /// The queried path.
        path: String,
    },

    /// A passthrough path exists but its backing disk file could not be
    /// read. The underlying I/O failure is attached as the cause.
    #[error("failed to read backing file {path:?}")]
    Passthrough {
        /// Location of the backing file on disk.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl PackError {
    /// Create a not-found error for the given path.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }
}
