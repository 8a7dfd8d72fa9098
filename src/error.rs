//! Application-level error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur within the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("resource `{name}` not found in bundle (searched {searched:?})")]
    ResourceNotFound { name: String, searched: Vec<PathBuf> },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("quote fetch ended without a result")]
    FetchAborted,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image decoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid build settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("GUI toolkit error: {0}")]
    Toolkit(String),
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
