//! Error types for Harmonium.

use thiserror::Error;

/// Result type alias using Harmonium's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Harmonium.
#[derive(Error, Debug)]
pub enum Error {
    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] HttpError),

    #[error("Network error: {0}")]
    Network(String),

    // Search backend errors
    #[error("Search backend error: {0}")]
    BackendSearch(String),

    #[error("Failed to parse API response: {0}")]
    Parse(String),

    // Stream resolution errors
    #[error("Media resolution failed: {0}")]
    MediaResolution(String),

    // Native player errors
    #[error("Player error: {0}")]
    Player(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// HTTP-specific errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed with status {status}: {message}")]
    StatusError { status: u16, message: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,
}

impl Error {
    /// Returns true if this error came from the search backend.
    pub const fn is_search_error(&self) -> bool {
        matches!(self, Self::BackendSearch(_))
    }

    /// Returns true if this error came from stream resolution.
    pub const fn is_resolution_error(&self) -> bool {
        matches!(self, Self::MediaResolution(_))
    }

    /// Returns true if this error came from the native player.
    pub const fn is_player_error(&self) -> bool {
        matches!(self, Self::Player(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(Error::BackendSearch("down".into()).is_search_error());
        assert!(Error::MediaResolution("bad id".into()).is_resolution_error());
        assert!(Error::Player("no device".into()).is_player_error());
        assert!(!Error::Network("test".into()).is_player_error());
    }

    #[test]
    fn test_error_display() {
        let err = Error::MediaResolution("video unavailable".into());
        assert_eq!(err.to_string(), "Media resolution failed: video unavailable");

        let err = Error::Http(HttpError::StatusError {
            status: 503,
            message: "unavailable".into(),
        });
        assert!(err.to_string().contains("503"));
    }
}
