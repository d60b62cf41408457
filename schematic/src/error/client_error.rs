//! HTTP client and network errors.

use thiserror::Error;

use super::AuthError;

/// Errors from the HTTP client layer.
///
/// These errors represent failures to complete an exchange with the server at
/// all. A response with a non-success status is not a `ClientError`; the
/// transport hands it back for classification instead.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// Failed to establish connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The request could not be assembled (bad URL or header).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No configured credential satisfies the route.
    ///
    /// Reported before anything is sent. Converted into
    /// [`ApiError::Auth`](super::ApiError::Auth) by the client.
    #[error(transparent)]
    Credentials(#[from] AuthError),
}

impl ClientError {
    /// Returns `true` if this error is retryable.
    ///
    /// Timeout and connection errors are typically retryable. Nothing in this
    /// crate retries; the predicate is for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) => true,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::InvalidRequest(_) | Self::Credentials(_) => false,
        }
    }

    /// Returns the HTTP status code attached to the underlying error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_retryable() {
        let err = ClientError::Timeout { duration_ms: 5000 };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_connection_is_retryable() {
        let err = ClientError::Connection("connection refused".to_string());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_invalid_request_not_retryable() {
        let err = ClientError::InvalidRequest("bad header".to_string());
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Invalid request: bad header");
    }

    #[test]
    fn test_credentials_display_is_transparent() {
        let err: ClientError = AuthError::MissingCredential {
            env_vars: vec!["DROPBOX_ACCESS_TOKEN".to_string()],
        }
        .into();
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("DROPBOX_ACCESS_TOKEN"));
    }

    #[test]
    fn test_status_code_absent_without_response() {
        let timeout = ClientError::Timeout { duration_ms: 1000 };
        assert_eq!(timeout.status_code(), None);
    }
}
