//! Error types for the member list client.

use roster_model::{ModelError, RecordId};
use thiserror::Error;

/// Errors that can occur while fetching the member list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The configured endpoint is not an absolute http(s) URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    /// Connection or transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {code}")]
    Status {
        /// HTTP status code.
        code: u16,
    },

    /// The body is not a JSON array of member records.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// The body lists the same id twice.
    #[error("response lists id {0} more than once")]
    DuplicateId(RecordId),
}

impl FetchError {
    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) | Self::Timeout => {
                "Could not reach the member service. Please check your internet connection."
            }
            Self::Status { code } if *code >= 500 => {
                "The member service is having trouble. Please try again later."
            }
            Self::Status { .. } => "The member service refused the request.",
            Self::Decode(_) | Self::DuplicateId(_) => {
                "The member service returned data the dashboard cannot read."
            }
            Self::InvalidEndpoint(_) | Self::Client(_) => {
                "The member service address is misconfigured."
            }
        }
    }

    /// Returns whether another attempt may succeed.
    ///
    /// Transport failures, timeouts, 5xx, 408 and 429 are transient; bad
    /// bodies and other 4xx answers are not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout => true,
            Self::Status { code } => *code >= 500 || *code == 408 || *code == 429,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                code: status.as_u16(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<ModelError> for FetchError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::DuplicateId(id) => Self::DuplicateId(id),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(FetchError::Timeout.is_retryable());
        assert!(FetchError::Network("reset".to_string()).is_retryable());
        assert!(FetchError::Status { code: 503 }.is_retryable());
        assert!(FetchError::Status { code: 429 }.is_retryable());
        assert!(!FetchError::Status { code: 404 }.is_retryable());
        assert!(!FetchError::Decode("eof".to_string()).is_retryable());
        assert!(!FetchError::DuplicateId(RecordId::new(1)).is_retryable());
    }

    #[test]
    fn test_user_messages() {
        assert!(FetchError::Timeout.user_message().contains("internet connection"));
        assert!(
            FetchError::Status { code: 502 }
                .user_message()
                .contains("try again later")
        );
        insta::assert_snapshot!(
            FetchError::DuplicateId(RecordId::new(7)).to_string(),
            @"response lists id 7 more than once"
        );
    }
}
