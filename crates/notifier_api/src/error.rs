use notifier_common::NotifierError;
use thiserror::Error;

/// Errors that can occur when talking to the schedule backend
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request failed before a response arrived, or the body was unreadable
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The configured base URL cannot carry path segments
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl From<ApiError> for NotifierError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status(status) => NotifierError::HttpStatus(status),
            ApiError::Request(err) => err.into(),
            ApiError::InvalidUrl(msg) => NotifierError::ConfigError(msg),
        }
    }
}
