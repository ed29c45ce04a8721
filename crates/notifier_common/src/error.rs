// --- File: crates/notifier_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by all notifier crates.
///
/// Each crate keeps its own error enum and implements `From<ItsError> for NotifierError`
/// so the view layer only has to deal with this one type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotifierError {
    /// The server answered with a status outside the 2xx range
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// The request never produced a response (connection refused, DNS, ...)
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// A response body could not be decoded
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Reading or writing the local preference store failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// The push platform failed (initialisation, token minting, display)
    #[error("Push error: {0}")]
    PushError(String),

    /// The user did not grant notification permission
    #[error("Notification permission was not granted")]
    PermissionDenied,

    /// The server replied 2xx but reported `success: false`
    #[error("Request rejected: {0}")]
    Rejected(String),
}

// Common error conversions
impl From<reqwest::Error> for NotifierError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => NotifierError::HttpStatus(status.as_u16()),
            None if err.is_decode() => NotifierError::ParseError(err.to_string()),
            None => NotifierError::HttpError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for NotifierError {
    fn from(err: serde_json::Error) -> Self {
        NotifierError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for NotifierError {
    fn from(err: std::io::Error) -> Self {
        NotifierError::StorageError(err.to_string())
    }
}

pub fn push_error<T: fmt::Display>(message: T) -> NotifierError {
    NotifierError::PushError(message.to_string())
}
