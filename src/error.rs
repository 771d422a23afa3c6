//! Error Types

use thiserror::Error;

/// Failures of the browser key-value storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures of the user directory fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(String),

    #[error("Failed to fetch users (HTTP {0})")]
    Status(u16),

    #[error("Failed to read response: {0}")]
    Body(String),

    #[error("Failed to parse users: {0}")]
    Decode(#[from] serde_json::Error),
}
