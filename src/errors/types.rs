use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Filesystem errors (catalog and playlist files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog serialization/deserialization failures
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed or missing playlist input
    #[error("Playlist error: {message}")]
    Playlist { message: String },

    /// External source errors (bad status, unusable base URL)
    #[error("Source error: {message}")]
    Source { message: String },
}

impl AppError {
    /// Create a playlist error with a custom message
    pub fn playlist<S: Into<String>>(message: S) -> Self {
        Self::Playlist {
            message: message.into(),
        }
    }

    /// Create a source error with a custom message
    pub fn source_error<S: Into<String>>(message: S) -> Self {
        Self::Source {
            message: message.into(),
        }
    }
}
