//! Failure classification.
//!
//! A non-2xx [`Invocation`](crate::transport::Invocation) is classified in a
//! fixed order, stopping at the first match:
//!
//! 1. [`auth_failure`]: 401, 403 and 429 become [`AuthError`]s.
//! 2. A body matching `{"error_summary": ..., "error": E}` becomes
//!    [`ApiError::Endpoint`].
//! 3. Anything else becomes [`ApiError::Opaque`] with the body unchanged.
//!
//! Classification never retries.

use bytes::Bytes;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, AuthError, EndpointError, ErrorEnvelope};

const UNAUTHORIZED: u16 = 401;
const FORBIDDEN: u16 = 403;
const TOO_MANY_REQUESTS: u16 = 429;

/// Loose shape shared by auth, access and rate-limit failure bodies.
#[derive(Debug, Default, Deserialize)]
struct AuthEnvelope {
    #[serde(default)]
    error_summary: Option<String>,
    #[serde(default)]
    error: Option<Value>,
}

impl AuthEnvelope {
    fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    fn tag(&self) -> Option<&str> {
        self.error.as_ref()?.get(".tag")?.as_str()
    }

    fn message(&self, body: &[u8]) -> String {
        self.error_summary
            .clone()
            .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned())
    }
}

/// Classifies credential, access and rate-limit failures.
///
/// Returns `None` for any other status so route-specific classification can
/// proceed.
///
/// ## Examples
///
/// ```
/// use schematic::classify::auth_failure;
/// use schematic::error::AuthError;
///
/// let body = br#"{"error_summary": "expired_access_token/", "error": {".tag": "expired_access_token"}}"#;
/// assert_eq!(auth_failure(401, body, None), Some(AuthError::ExpiredAccessToken));
/// assert_eq!(auth_failure(409, body, None), None);
/// ```
pub fn auth_failure(status: u16, body: &[u8], retry_after: Option<u64>) -> Option<AuthError> {
    match status {
        UNAUTHORIZED => Some(unauthorized(body)),
        FORBIDDEN => {
            let envelope = AuthEnvelope::parse(body);
            Some(AuthError::AccessDenied {
                message: envelope.message(body),
            })
        }
        TOO_MANY_REQUESTS => Some(rate_limited(body, retry_after)),
        _ => None,
    }
}

fn unauthorized(body: &[u8]) -> AuthError {
    let envelope = AuthEnvelope::parse(body);
    match envelope.tag() {
        Some("invalid_access_token") => AuthError::InvalidAccessToken,
        Some("expired_access_token") => AuthError::ExpiredAccessToken,
        Some("invalid_select_user") => AuthError::InvalidSelectUser,
        Some("invalid_select_admin") => AuthError::InvalidSelectAdmin,
        Some("user_suspended") => AuthError::UserSuspended,
        Some("route_access_denied") => AuthError::RouteAccessDenied,
        Some("missing_scope") => AuthError::MissingScope {
            required_scope: envelope
                .error
                .as_ref()
                .and_then(|e| e.get("required_scope"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        },
        _ => AuthError::AuthenticationFailed {
            message: envelope.message(body),
        },
    }
}

fn rate_limited(body: &[u8], retry_after: Option<u64>) -> AuthError {
    let envelope = AuthEnvelope::parse(body);
    let error = envelope.error.as_ref();

    let reason = error
        .and_then(|e| e.get("reason"))
        .and_then(|r| r.get(".tag"))
        .and_then(Value::as_str)
        .unwrap_or("too_many_requests")
        .to_string();

    let retry_after_seconds = error
        .and_then(|e| e.get("retry_after"))
        .and_then(Value::as_u64)
        .or(retry_after)
        .unwrap_or(0);

    AuthError::RateLimited {
        reason,
        retry_after_seconds,
    }
}

/// Classifies a failed response for a route whose error schema is `E`.
///
/// The summary of a structured error is kept verbatim and an opaque body is
/// kept byte-for-byte.
pub fn classify<E: DeserializeOwned>(
    status: u16,
    body: Bytes,
    retry_after: Option<u64>,
) -> ApiError<E> {
    if let Some(auth) = auth_failure(status, &body, retry_after) {
        return ApiError::Auth(auth);
    }

    match serde_json::from_slice::<ErrorEnvelope<E>>(&body) {
        Ok(envelope) => ApiError::Endpoint(EndpointError {
            status,
            summary: envelope.error_summary,
            error: envelope.error,
        }),
        Err(_) => ApiError::Opaque { status, body },
    }
}
