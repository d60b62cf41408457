//! Default HTTP transport on `reqwest`.

use std::pin::Pin;
use std::sync::Mutex;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::{Stream, StreamExt, TryStreamExt};
use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use schematic_define::{AuthClass, RouteDescriptor, WireStyle};
use tracing::{Span, instrument};
use url::Url;

use super::header::{API_ARG_HEADER, API_RESULT_HEADER, header_safe_json, merge_headers};
use super::{ByteStream, Invocation, Transport};
use crate::config::{ClientConfig, credential_env_vars};
use crate::error::{AuthError, ClientError, ConfigError};

/// Idle connections kept per host.
const POOL_MAX_IDLE_PER_HOST: usize = 10;

/// [`Transport`] over HTTPS with connection pooling.
///
/// ## Examples
///
/// ```rust,ignore
/// use schematic::{ClientConfig, HttpTransport};
///
/// let transport = HttpTransport::new(ClientConfig::builder().access_token("sl.xxx").build()?)?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Creates a transport from a resolved configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self { client, config })
    }

    /// Returns the configuration this transport was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns `{base}/2/{namespace}/{path}` for the route's host class.
    pub fn route_url(&self, route: &RouteDescriptor) -> Result<Url, ClientError> {
        let mut url = self.config.base_url(route.host).clone();
        url.path_segments_mut()
            .map_err(|()| {
                ClientError::InvalidRequest(format!("{} base URL cannot hold a path", route.host))
            })?
            .pop_if_empty()
            .push("2")
            .push(route.namespace)
            .extend(route.path.split('/'));
        Ok(url)
    }

    /// Applies the first configured credential the route accepts.
    fn apply_auth(
        &self,
        request: reqwest::RequestBuilder,
        route: &RouteDescriptor,
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let credentials = self.config.credentials();

        if route.auth.contains(AuthClass::User) || route.auth.contains(AuthClass::Team) {
            if let Some(token) = &credentials.access_token {
                return Ok(request.bearer_auth(token));
            }
        }

        if route.auth.contains(AuthClass::App) {
            if let Some(app) = &credentials.app {
                return Ok(request.basic_auth(&app.key, Some(&app.secret)));
            }
        }

        if route.auth.contains(AuthClass::None) {
            return Ok(request);
        }

        Err(AuthError::MissingCredential {
            env_vars: credential_env_vars(route.auth),
        }
        .into())
    }

    fn send_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout {
                duration_ms: u64::try_from(self.config.timeout().as_millis()).unwrap_or(u64::MAX),
            }
        } else if error.is_connect() {
            ClientError::Connection(error.to_string())
        } else {
            ClientError::Request(error)
        }
    }
}

impl Transport for HttpTransport {
    #[instrument(
        name = "http_request",
        skip(self, route, arg, body),
        fields(
            http.method = "POST",
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn invoke(
        &self,
        route: &RouteDescriptor,
        arg: String,
        body: Option<ByteStream>,
    ) -> Result<Invocation, ClientError> {
        let url = self.route_url(route)?;
        Span::current().record("http.url", url.as_str());

        let mut request = self.client.post(url);
        request = self.apply_auth(request, route)?;

        for (key, value) in merge_headers(self.config.default_headers(), route.extra_headers) {
            request = request.header(key, value);
        }

        request = match route.style {
            WireStyle::Rpc => request
                .header(CONTENT_TYPE, "application/json")
                .body(arg),
            WireStyle::Upload => {
                let content = body.unwrap_or_else(|| futures::stream::empty().boxed());
                request
                    .header(API_ARG_HEADER, header_safe_json(&arg))
                    .header(CONTENT_TYPE, "application/octet-stream")
                    .body(reqwest::Body::wrap_stream(SyncStream::new(content)))
            }
            WireStyle::Download => request.header(API_ARG_HEADER, header_safe_json(&arg)),
        };

        let response = request.send().await.map_err(|e| self.send_error(e))?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok());
            let body = response.bytes().await.map_err(ClientError::Request)?;

            return Ok(Invocation::Failure {
                status: status_code,
                body,
                retry_after,
            });
        }

        Span::current().record("otel.status_code", "OK");

        if route.style.returns_content() {
            let result = response
                .headers()
                .get(API_RESULT_HEADER)
                .map(|v| Bytes::copy_from_slice(v.as_bytes()))
                .unwrap_or_default();
            let content = response.bytes_stream().map_err(ClientError::Request).boxed();
            return Ok(Invocation::Success {
                body: result,
                content: Some(content),
            });
        }

        let body = response.bytes().await.map_err(ClientError::Request)?;
        Ok(Invocation::Success {
            body,
            content: None,
        })
    }
}

/// Adapts a [`ByteStream`] to the `Sync` bound request bodies need.
///
/// The stream is only ever polled through `&mut self`, so the lock is never
/// contended.
struct SyncStream(Mutex<ByteStream>);

impl SyncStream {
    fn new(stream: ByteStream) -> Self {
        Self(Mutex::new(stream))
    }
}

impl Stream for SyncStream {
    type Item = Result<Bytes, ClientError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let stream = match self.get_mut().0.get_mut() {
            Ok(stream) => stream,
            Err(poisoned) => poisoned.into_inner(),
        };
        stream.as_mut().poll_next(cx)
    }
}
