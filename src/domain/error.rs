use std::path::PathBuf;

use thiserror::Error;

/// Failures of the options store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed options in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode options: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Failures of the model catalog lookup
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Invalid catalog response: {0}")]
    Decode(String),
}
