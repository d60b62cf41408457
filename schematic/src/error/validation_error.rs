//! Argument serialization and response decoding errors.

use thiserror::Error;

/// Errors while encoding an argument or decoding a success response.
///
/// These are never retried: a malformed success body means the client and
/// server disagree about the route's schema.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The route argument could not be serialized.
    #[error("Failed to serialize route argument: {0}")]
    ArgumentSerialize(#[source] serde_json::Error),

    /// Empty response body when a result was expected.
    #[error("Empty response body")]
    EmptyBody,

    /// A download route succeeded without a content stream.
    #[error("Download response carried no content stream")]
    MissingContent,
}

impl ValidationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_) | Self::EmptyBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_parse_is_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = ValidationError::JsonParse(json_err);
        assert!(err.is_parse_error());
        assert!(err.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn test_missing_content_not_parse_error() {
        let err = ValidationError::MissingContent;
        assert!(!err.is_parse_error());
        assert_eq!(
            err.to_string(),
            "Download response carried no content stream"
        );
    }
}
