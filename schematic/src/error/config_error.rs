//! Client configuration errors.

use thiserror::Error;

use super::AuthError;

/// Errors in client configuration.
///
/// These occur while building a client, typically indicating programmer
/// errors or invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A base URL cannot carry a path (e.g. `data:` or `mailto:` URLs).
    #[error("Base URL cannot be a base: {url}")]
    CannotBeABase {
        /// The offending URL.
        url: String,
    },

    /// A default header has an invalid name or value.
    #[error("Invalid header '{name}': {message}")]
    InvalidHeader {
        /// The header name as given.
        name: String,
        /// Why the header was rejected.
        message: String,
    },

    /// No usable credentials were found while loading configuration.
    #[error(transparent)]
    Credentials(#[from] AuthError),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigError {
    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cannot_be_a_base() {
        let err = ConfigError::CannotBeABase {
            url: "mailto:someone@example.com".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Base URL cannot be a base: mailto:someone@example.com"
        );
    }

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not-a-url").unwrap_err();
        let err = ConfigError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_invalid_header() {
        let err = ConfigError::invalid_header("X Bad", "invalid HTTP header name");
        assert_eq!(
            err.to_string(),
            "Invalid header 'X Bad': invalid HTTP header name"
        );
    }
}
