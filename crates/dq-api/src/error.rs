//! Error types for the metadata service client.

use thiserror::Error;

/// Errors raised while talking to the metadata service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request never completed (connection, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The service rejected our credentials.
    #[error("authorization rejected by the metadata service (status {status})")]
    Unauthorized { status: u16 },

    /// The service answered with a non-success status.
    #[error("metadata service error ({status}): {body}")]
    Service { status: u16, body: String },
}

impl ApiError {
    /// Whether a retry might help. Callers own the retry policy; the client
    /// itself never retries.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_network_errors_are_retryable() {
        assert!(ApiError::Network("timeout".to_string()).is_retryable());
        assert!(!ApiError::Unauthorized { status: 401 }.is_retryable());
        assert!(
            !ApiError::Service {
                status: 500,
                body: "oops".to_string()
            }
            .is_retryable()
        );
    }
}
