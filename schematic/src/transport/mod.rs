//! Transport contract and the default HTTP transport.
//!
//! The client never touches the network itself. It hands a route descriptor,
//! the serialized argument and an optional upload body to a [`Transport`],
//! which returns an [`Invocation`] for the client to decode or classify.

mod header;
mod http;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use schematic_define::RouteDescriptor;

use crate::error::ClientError;

pub use header::{API_ARG_HEADER, API_RESULT_HEADER, header_safe_json, merge_headers};
pub use http::HttpTransport;

/// A stream of raw content chunks for upload requests and download responses.
pub type ByteStream = BoxStream<'static, Result<Bytes, ClientError>>;

/// Outcome of one completed HTTP exchange.
///
/// Connection-level failures are not an `Invocation`; they are reported as
/// `Err(ClientError)` by [`Transport::invoke`].
pub enum Invocation {
    /// 2xx response.
    Success {
        /// JSON result: the response body, or for download routes the
        /// `Dropbox-API-Result` header value.
        body: Bytes,
        /// Raw content for download routes.
        content: Option<ByteStream>,
    },
    /// Non-2xx response, handed back uninterpreted.
    Failure {
        /// HTTP status code.
        status: u16,
        /// Response body, unchanged.
        body: Bytes,
        /// `Retry-After` header in seconds, when present and numeric.
        retry_after: Option<u64>,
    },
}

impl Invocation {
    /// Shorthand for a success without content.
    pub fn success(body: impl Into<Bytes>) -> Self {
        Self::Success {
            body: body.into(),
            content: None,
        }
    }

    /// Shorthand for a failure without a `Retry-After` value.
    pub fn failure(status: u16, body: impl Into<Bytes>) -> Self {
        Self::Failure {
            status,
            body: body.into(),
            retry_after: None,
        }
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { body, content } => f
                .debug_struct("Success")
                .field("body", body)
                .field("content", &content.as_ref().map(|_| "<stream>"))
                .finish(),
            Self::Failure {
                status,
                body,
                retry_after,
            } => f
                .debug_struct("Failure")
                .field("status", status)
                .field("body", body)
                .field("retry_after", retry_after)
                .finish(),
        }
    }
}

/// Performs the network exchange for one route call.
///
/// Implementations decide where the argument travels from the route's
/// [`WireStyle`](schematic_define::WireStyle), attach credentials, and apply
/// timeouts. They must not interpret failure bodies.
pub trait Transport: Send + Sync {
    /// Executes one call.
    ///
    /// `arg` is the route argument serialized as JSON. `body` is present only
    /// for upload routes.
    ///
    /// ## Errors
    ///
    /// Returns a [`ClientError`] if no response was received, or if no
    /// configured credential satisfies the route.
    fn invoke(
        &self,
        route: &RouteDescriptor,
        arg: String,
        body: Option<ByteStream>,
    ) -> impl Future<Output = Result<Invocation, ClientError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn invoke(
        &self,
        route: &RouteDescriptor,
        arg: String,
        body: Option<ByteStream>,
    ) -> impl Future<Output = Result<Invocation, ClientError>> + Send {
        (**self).invoke(route, arg, body)
    }
}
