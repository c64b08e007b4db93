//! Client error types.

use lunartools_core::ValidationError;

/// Errors that can occur when using the Lunartools client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The record failed local validation; no request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The request body could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The request could not be built or sent, or the response body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a status outside 200-299.
    #[error("request failed with status: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status code for [`ClientError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error was raised before any request was sent.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
