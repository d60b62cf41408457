//! Authentication and authorization errors.

use thiserror::Error;

/// Errors related to credentials.
///
/// Raised either locally, when no configured credential fits a route, or by
/// the classifier for 401, 403 and 429 responses. These take precedence over
/// route-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// None of the listed environment variables (or configured credentials)
    /// provided a usable value.
    #[error("Missing credentials: none of the following environment variables are set: {env_vars:?}")]
    MissingCredential {
        /// The environment variable names that were checked.
        env_vars: Vec<String>,
    },

    /// The access token is malformed or has been revoked.
    #[error("Invalid access token")]
    InvalidAccessToken,

    /// The access token has expired.
    #[error("Access token expired")]
    ExpiredAccessToken,

    /// The token lacks a scope the route requires.
    #[error("Access token is missing required scope '{required_scope}'")]
    MissingScope {
        /// The scope the route needs.
        required_scope: String,
    },

    /// The user selected with `Dropbox-API-Select-User` is not a team member.
    #[error("Invalid selected user")]
    InvalidSelectUser,

    /// The admin selected with `Dropbox-API-Select-Admin` is not a team admin.
    #[error("Invalid selected admin")]
    InvalidSelectAdmin,

    /// The account has been suspended.
    #[error("User suspended")]
    UserSuspended,

    /// The caller may not use this route.
    #[error("Route access denied")]
    RouteAccessDenied,

    /// Server rejected the credentials with an unrecognized reason.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error summary or raw body from the server.
        message: String,
    },

    /// The account lacks access to the resource or feature (HTTP 403).
    #[error("Access denied: {message}")]
    AccessDenied {
        /// Error summary or raw body from the server.
        message: String,
    },

    /// The request was rate limited (HTTP 429).
    #[error("Rate limited ({reason}), retry after {retry_after_seconds}s")]
    RateLimited {
        /// The server-given reason tag (e.g. `too_many_requests`).
        reason: String,
        /// Seconds to wait before trying again.
        retry_after_seconds: u64,
    },
}

impl AuthError {
    /// Returns `true` if this error could potentially be resolved by
    /// refreshing credentials.
    pub fn is_refreshable(&self) -> bool {
        matches!(self, Self::ExpiredAccessToken)
    }

    /// Returns the HTTP status this error was classified from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::MissingCredential { .. } => None,
            Self::AccessDenied { .. } => Some(403),
            Self::RateLimited { .. } => Some(429),
            _ => Some(401),
        }
    }

    /// Returns the server-advised wait for rate-limited requests.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimited {
                retry_after_seconds,
                ..
            } => Some(*retry_after_seconds),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_display() {
        let err = AuthError::MissingCredential {
            env_vars: vec!["DROPBOX_ACCESS_TOKEN".to_string(), "DROPBOX_TOKEN".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Missing credentials: none of the following environment variables are set: [\"DROPBOX_ACCESS_TOKEN\", \"DROPBOX_TOKEN\"]"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_expired_token_is_refreshable() {
        assert!(AuthError::ExpiredAccessToken.is_refreshable());
        assert!(!AuthError::InvalidAccessToken.is_refreshable());
    }

    #[test]
    fn test_missing_scope_display() {
        let err = AuthError::MissingScope {
            required_scope: "sharing.read".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Access token is missing required scope 'sharing.read'"
        );
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_rate_limited() {
        let err = AuthError::RateLimited {
            reason: "too_many_write_operations".to_string(),
            retry_after_seconds: 12,
        };
        assert_eq!(err.retry_after(), Some(12));
        assert_eq!(err.status(), Some(429));
        assert!(err.to_string().contains("retry after 12s"));
    }

    #[test]
    fn test_access_denied_status() {
        let err = AuthError::AccessDenied {
            message: "paper_access_denied/".to_string(),
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.retry_after(), None);
    }
}
