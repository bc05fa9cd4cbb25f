//! Error types for store operations.
//!
//! Decode failures never reach the user (loading falls back to an empty
//! draft), so these errors cover the write path and path resolution.

use std::path::PathBuf;

/// Errors that can occur during snapshot store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read a snapshot file.
    #[error("failed to read snapshot at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a snapshot file.
    #[error("failed to write snapshot at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a snapshot.
    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json5::Error),

    /// Failed to serialize a snapshot to JSON.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to determine the user data directory.
    #[error("could not determine user data directory")]
    NoDataDirectory,
}

/// A specialized Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
