// src/error.rs
// Standardized error types for hpschd

use thiserror::Error as ThisError;

/// Main error type for the hpschd library
#[derive(ThisError, Debug)]
pub enum Error {
    /// Both the title and the override normalized to an empty spine.
    /// The engine refuses to run rather than index an empty sequence.
    #[error("empty spine: title and override are both blank")]
    EmptySpine,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("remote source error: {0}")]
    Fetch(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),
}

/// Convenience type alias for Result using the crate error
pub type Result<T> = std::result::Result<T, Error>;
