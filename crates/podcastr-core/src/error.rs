//! Error types for Podcastr.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using Podcastr's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Podcastr.
///
/// Playback operations are total and never produce one of these; only
/// loading configuration and episode catalogs can fail.
#[derive(Error, Debug)]
pub enum Error {
    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Generic errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns true if the error came from the filesystem rather than from
    /// malformed content.
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::ReadFile { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(Error::Io(io).is_io());
        assert!(!Error::Config("bad".into()).is_io());
    }

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("episode without url".into());
        assert_eq!(err.to_string(), "Invalid argument: episode without url");

        let err = Error::ReadFile {
            path: PathBuf::from("/tmp/episodes.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read /tmp/episodes.json: not found"
        );
    }
}
