//! Error types for the driver pool
//!
//! This module provides the error type hierarchy using `thiserror`.
//! Configuration fallback (unknown or missing browser name) is deliberately
//! *not* represented here: resolution always succeeds and reports its
//! fallback through [`crate::browser::BrowserChoice`] instead of an error.

use thiserror::Error;

use crate::browser::BrowserType;

/// The main error type for driver pool operations
#[derive(Error, Debug)]
pub enum Error {
    /// Session lifecycle errors (launch, command, quit)
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Errors from creating, driving, or destroying a browser session
#[derive(Error, Debug)]
pub enum SessionError {
    /// The backend failed to start the browser
    #[error("Failed to launch {browser}: {message}")]
    LaunchFailed {
        /// Browser that was being launched
        browser: BrowserType,
        /// Underlying failure description
        message: String,
    },

    /// The backend cannot drive the requested browser at all
    #[error("Browser {browser} is not supported by the {backend} backend")]
    UnsupportedBrowser {
        /// Browser that was requested
        browser: BrowserType,
        /// Name of the backend that rejected it
        backend: &'static str,
    },

    /// A command sent to a live session failed
    #[error("Session command failed: {0}")]
    CommandFailed(String),

    /// Quit was attempted but the session could not be torn down cleanly
    #[error("Failed to quit session: {0}")]
    QuitFailed(String),

    /// The session was already closed
    #[error("Session already closed")]
    AlreadyClosed,

    /// The backend's runtime could not be built
    #[error("Failed to build session runtime: {0}")]
    RuntimeFailed(String),
}

/// Result type alias for driver pool operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::from(SessionError::CommandFailed("boom".to_string()));
        assert!(err.to_string().contains("Session command failed"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_unsupported_browser_display() {
        let err = SessionError::UnsupportedBrowser {
            browser: BrowserType::Safari,
            backend: "chromium",
        };
        assert_eq!(
            err.to_string(),
            "Browser safari is not supported by the chromium backend"
        );
    }

    #[test]
    fn test_session_error_conversion() {
        let err: Error = SessionError::AlreadyClosed.into();
        assert!(matches!(err, Error::Session(SessionError::AlreadyClosed)));
    }
}
