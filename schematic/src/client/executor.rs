//! Route execution with tracing instrumentation.
//!
//! This module provides the [`Client`] struct for executing typed routes
//! over any [`Transport`], with deprecation notices and failure
//! classification.

use bytes::Bytes;
use tracing::{Span, instrument};

use crate::classify::classify;
use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError, ValidationError};
use crate::notice::{Notifier, TracingNotifier};
use crate::response::{Download, ResponseFormat};
use crate::route::{self, Output, Route};
use crate::transport::{ByteStream, HttpTransport, Invocation, Transport};

/// Typed facade over a [`Transport`].
///
/// `Client` holds no per-call state; it is `Send + Sync` whenever its
/// transport and notifier are, and can be shared behind an `Arc`.
///
/// ## Examples
///
/// ```rust,ignore
/// use schematic::{Client, ClientConfig};
/// use schematic_definitions::dropbox::paper;
///
/// let client = Client::new(ClientConfig::builder().access_token(token).build()?)?;
/// let docs = client.call::<paper::DocsList>(&Default::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport, N = TracingNotifier> {
    transport: T,
    notifier: N,
}

impl Client {
    /// Creates a client over the default HTTP transport.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over a custom transport, logging deprecation notices
    /// through `tracing`.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            notifier: TracingNotifier,
        }
    }
}

impl<T: Transport, N: Notifier> Client<T, N> {
    /// Replaces the deprecation notifier.
    pub fn with_notifier<M: Notifier>(self, notifier: M) -> Client<T, M> {
        Client {
            transport: self.transport,
            notifier,
        }
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Calls an RPC-style route.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Auth`] for credential, access or rate-limit
    /// failures, [`ApiError::Endpoint`] when the server reports the route's
    /// own error, [`ApiError::Opaque`] for unstructured failures,
    /// [`ApiError::Client`] when no response was received, and
    /// [`ApiError::Validation`] when the argument cannot be serialized or the
    /// success body does not decode.
    #[instrument(
        name = "route_call",
        skip(self, arg),
        fields(
            route = R::DESCRIPTOR.name,
            style = %R::DESCRIPTOR.style,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn call<R: route::Rpc>(&self, arg: &R::Arg) -> Result<Output<R>, ApiError<R::Error>> {
        let (body, _) = self.dispatch::<R>(arg, None).await?;
        Ok(R::Format::parse(body).await?)
    }

    /// Calls an upload-style route, streaming `content` as the request body.
    ///
    /// ## Errors
    ///
    /// Same as [`call`](Self::call).
    #[instrument(
        name = "route_call",
        skip(self, arg, content),
        fields(
            route = R::DESCRIPTOR.name,
            style = %R::DESCRIPTOR.style,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn upload<R: route::Upload>(
        &self,
        arg: &R::Arg,
        content: ByteStream,
    ) -> Result<Output<R>, ApiError<R::Error>> {
        let (body, _) = self.dispatch::<R>(arg, Some(content)).await?;
        Ok(R::Format::parse(body).await?)
    }

    /// Calls a download-style route.
    ///
    /// The decoded result is available immediately; the content stream is
    /// returned unread.
    ///
    /// ## Errors
    ///
    /// Same as [`call`](Self::call), plus
    /// [`ValidationError::MissingContent`] if the transport returned no
    /// content stream.
    #[instrument(
        name = "route_call",
        skip(self, arg),
        fields(
            route = R::DESCRIPTOR.name,
            style = %R::DESCRIPTOR.style,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn download<R: route::Download>(
        &self,
        arg: &R::Arg,
    ) -> Result<Download<Output<R>>, ApiError<R::Error>> {
        let (body, content) = self.dispatch::<R>(arg, None).await?;
        let content = content.ok_or(ValidationError::MissingContent)?;
        let result = R::Format::parse(body).await?;
        Ok(Download { result, content })
    }

    /// Notifies, serializes, invokes and classifies. Runs inside the caller's
    /// `route_call` span.
    async fn dispatch<R: Route>(
        &self,
        arg: &R::Arg,
        content: Option<ByteStream>,
    ) -> Result<(Bytes, Option<ByteStream>), ApiError<R::Error>> {
        let route = R::DESCRIPTOR;

        if route.is_deprecated() {
            self.notifier.notice(&route);
        }

        let arg = serde_json::to_string(arg).map_err(ValidationError::ArgumentSerialize)?;
        let invocation = self.transport.invoke(&route, arg, content).await?;

        match invocation {
            Invocation::Success { body, content } => {
                Span::current().record("otel.status_code", "OK");
                Ok((body, content))
            }
            Invocation::Failure {
                status,
                body,
                retry_after,
            } => {
                Span::current().record("http.status_code", status);
                let otel_status = if status >= 500 { "ERROR" } else { "UNSET" };
                Span::current().record("otel.status_code", otel_status);
                Err(classify(status, body, retry_after))
            }
        }
    }
}
