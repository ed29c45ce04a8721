use notifier_common::NotifierError;
use thiserror::Error;

/// Errors raised by push platforms
#[derive(Error, Debug)]
pub enum PushError {
    /// Required settings are missing from the `[firebase]` section
    #[error("Missing configuration: {0}")]
    NotConfigured(String),

    /// Writing a notification to its output failed
    #[error("Failed to display notification: {0}")]
    Display(#[from] std::io::Error),

    /// The platform reported an error of its own
    #[error("Push platform error: {0}")]
    Platform(String),
}

impl From<PushError> for NotifierError {
    fn from(err: PushError) -> Self {
        match err {
            PushError::NotConfigured(msg) => NotifierError::ConfigError(msg),
            other => NotifierError::PushError(other.to_string()),
        }
    }
}
