//! Per-route error type.

use bytes::Bytes;
use thiserror::Error;

use super::{AuthError, ClientError, ConfigError, EndpointError, ValidationError};

/// Error type for one route whose structured error schema is `E`.
///
/// Variants are ordered from most to least specific. The classifier checks
/// for [`AuthError`] before attempting to decode `E`, and falls back to
/// [`ApiError::Opaque`] only when the body is not a valid error envelope.
///
/// ## Examples
///
/// ```
/// use schematic::error::{ApiError, EndpointError, Void};
///
/// fn describe(err: &ApiError<Void>) -> String {
///     match err {
///         ApiError::Endpoint(e) => format!("route failed: {}", e.summary),
///         ApiError::Auth(e) => format!("credentials: {e}"),
///         ApiError::Opaque { status, .. } => format!("HTTP {status}"),
///         other => other.to_string(),
///     }
/// }
///
/// let err: ApiError<Void> = ApiError::Endpoint(EndpointError {
///     status: 409,
///     summary: "other/..".to_string(),
///     error: Void {},
/// });
/// assert_eq!(describe(&err), "route failed: other/..");
/// ```
#[derive(Debug, Error)]
pub enum ApiError<E> {
    /// HTTP client errors (network, timeout, connection failures).
    #[error(transparent)]
    Client(ClientError),

    /// Authentication and authorization errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The server answered with the route's structured error.
    #[error("{0}")]
    Endpoint(EndpointError<E>),

    /// The failure body was not a structured error envelope.
    #[error("HTTP {status}: {}", String::from_utf8_lossy(.body))]
    Opaque {
        /// HTTP status of the failed response.
        status: u16,
        /// Response body, unchanged.
        body: Bytes,
    },

    /// Argument serialization or success-body decoding failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Client configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl<E> From<ClientError> for ApiError<E> {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Credentials(auth) => Self::Auth(auth),
            other => Self::Client(other),
        }
    }
}

impl<E> From<EndpointError<E>> for ApiError<E> {
    fn from(err: EndpointError<E>) -> Self {
        Self::Endpoint(err)
    }
}

impl<E> ApiError<E> {
    /// Returns the decoded route-specific error, if the failure carried one.
    pub fn endpoint_error(&self) -> Option<&E> {
        match self {
            Self::Endpoint(e) => Some(&e.error),
            _ => None,
        }
    }

    /// Returns the HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Endpoint(e) => Some(e.status),
            Self::Opaque { status, .. } => Some(*status),
            Self::Auth(e) => e.status(),
            Self::Client(e) => e.status_code(),
            Self::Validation(_) | Self::Config(_) => None,
        }
    }

    /// Returns the server's `error_summary` for structured failures.
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Endpoint(e) => Some(e.summary.as_str()),
            _ => None,
        }
    }
}
