//! Structured, route-specific error bodies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A failure the server described with the route's own error schema.
///
/// `summary` is the server's `error_summary`, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointError<E> {
    /// HTTP status of the failed response.
    pub status: u16,
    /// Human-readable summary, e.g. `"doc_not_found/.."`.
    pub summary: String,
    /// The decoded route-specific error.
    pub error: E,
}

impl<E> fmt::Display for EndpointError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {})", self.summary, self.status)
    }
}

impl<E: fmt::Debug> std::error::Error for EndpointError<E> {}

/// Wire shape of a structured failure body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope<E> {
    /// Human-readable summary.
    pub error_summary: String,
    /// Schema-dependent error value.
    pub error: E,
}

/// Error type for routes that declare no structured error.
///
/// Decodes from any JSON object, so only the envelope's summary carries
/// information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Void {}

impl fmt::Display for Void {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no structured error")
    }
}
