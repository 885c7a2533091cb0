//! Error types for persistence operations
//!
//! Decoding and storage failures are always recoverable: the caller keeps its
//! current state and reports the error.

use thiserror::Error;

/// Stored region data could not be turned into a region set
#[derive(Error, Debug)]
pub enum ParseError {
    /// Nothing stored under the key
    #[error("no saved regions under key {0:?}")]
    Missing(String),

    /// Not valid JSON, or a field has the wrong type
    #[error("malformed region data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Valid JSON, but not a shape any schema version uses
    #[error("unrecognized region schema: {0}")]
    Schema(String),

    /// A rectangle with zero width or height
    #[error("region {index} has zero {axis}")]
    Degenerate { index: usize, axis: &'static str },

    /// Coordinates outside the world pixel range
    #[error("region {index} lies outside the coordinate range")]
    OutOfRange { index: usize },
}

/// Key-value store failures
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Atomic replace of the stored file failed
    #[error("failed to persist {key}: {source}")]
    Persist {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Key contains characters not allowed in a file name
    #[error("invalid store key {0:?}")]
    InvalidKey(String),
}

/// Errors surfaced by save/load
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Serializing the snapshot failed
    #[error("failed to encode regions: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type alias for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;
