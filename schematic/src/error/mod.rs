//! Layered error types for route dispatch.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Per-route error type returned by every call
//! - [`ClientError`] - HTTP client and network errors
//! - [`AuthError`] - Credential and authorization failures
//! - [`EndpointError`] - Structured, route-specific error bodies
//! - [`ValidationError`] - Argument serialization and response decoding errors
//! - [`ConfigError`] - Client construction errors

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod endpoint_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use endpoint_error::{EndpointError, ErrorEnvelope, Void};
pub use validation_error::ValidationError;
