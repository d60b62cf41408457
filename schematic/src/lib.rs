//! Typed Dropbox API client runtime.
//!
//! The `schematic` crate dispatches calls described by static route tables.
//! Each route is a zero-sized type carrying a [`RouteDescriptor`] and the
//! argument, result and error types of one remote operation; the [`Client`]
//! serializes the argument, hands it to a [`Transport`], and decodes the
//! outcome into a typed value or an [`ApiError`].
//!
//! ## Features
//!
//! - **Route tables**: Declare routes with [`routes!`] and check them with
//!   [`validate_routes`]
//! - **Three wire styles**: RPC, upload, and download
//! - **Tagged unions**: `.tag`-discriminated results with a catch-all for
//!   variants added after this crate was built
//! - **Layered error handling**: auth failures, structured endpoint errors,
//!   and opaque HTTP failures are kept apart
//! - **Deprecation advisories**: retired routes emit a notice through a
//!   pluggable [`Notifier`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use schematic::{Client, ClientConfig};
//! use schematic_definitions::dropbox::sharing::{ListFolders, ListFoldersArgs};
//!
//! let client = Client::new(ClientConfig::from_env()?)?;
//! let folders = client.call::<ListFolders>(&ListFoldersArgs::default()).await?;
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod notice;
pub mod response;
pub mod route;
pub mod transport;

// Re-exports for convenience
pub use client::Client;
pub use config::{AppCredentials, ClientConfig, ClientConfigBuilder, Credentials};
pub use error::{
    ApiError, AuthError, ClientError, ConfigError, EndpointError, ErrorEnvelope, ValidationError,
    Void,
};
pub use notice::{Notifier, SilentNotifier, TracingNotifier};
pub use response::{Download, EmptyFormat, JsonFormat, ResponseFormat, TaggedUnion, UnionFormat};
pub use route::{Output, Route};
pub use schematic_define::{
    AuthClass, AuthSet, Deprecation, HostClass, RouteDescriptor, RouteTableError, WireStyle,
    validate_routes,
};
pub use transport::{ByteStream, HttpTransport, Invocation, Transport};
