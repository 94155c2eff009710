//! Error types for Snooze
//!
//! This module defines all error types used throughout the crate,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Snooze operations
///
/// Remote failures are classified by the HTTP transport into the
/// `NotFound`, `Unauthorized`, `Validation`, `Conflict`, `Api` and
/// `Transport` variants so that callers (and the presentation layer) can
/// tell them apart after they propagate.
#[derive(Error, Debug)]
pub enum SnoozeError {
    /// The referenced username or story does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad credentials or an invalid/expired token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Submitted fields were rejected by the service
    #[error("Validation error: {0}")]
    Validation(String),

    /// The resource already exists (e.g. the username is taken)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The service answered with an unexpected non-success status
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code returned by the service
        status: u16,
        /// Message extracted from the error body, if any
        message: String,
    },

    /// Network failure or unreadable response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session state errors (not logged in, unreadable session file)
    #[error("Session error: {0}")]
    Session(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl SnoozeError {
    /// Find the `SnoozeError` carried by an `anyhow::Error`, if any
    ///
    /// # Examples
    ///
    /// ```
    /// use snooze::error::SnoozeError;
    ///
    /// let err: anyhow::Error = SnoozeError::NotFound("alice".to_string()).into();
    /// assert!(matches!(SnoozeError::classify(&err), Some(SnoozeError::NotFound(_))));
    /// ```
    pub fn classify(err: &anyhow::Error) -> Option<&SnoozeError> {
        err.chain().find_map(|cause| cause.downcast_ref::<SnoozeError>())
    }

    /// Returns true when the error means the service rejected the request
    /// itself rather than failing to answer it
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::Unauthorized(_)
                | Self::Validation(_)
                | Self::Conflict(_)
                | Self::Api { .. }
        )
    }
}

/// Result type alias for Snooze operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
