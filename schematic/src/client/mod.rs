//! Route client.
//!
//! This module provides the [`Client`] facade: one generic method per wire
//! style, wiring a route's descriptor, argument, decoder and error classifier
//! together with tracing instrumentation and deprecation notices.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use schematic::{Client, ClientConfig};
//! use schematic_definitions::dropbox::sharing::{self, GetSharedLinkMetadataArg};
//!
//! let client = Client::new(ClientConfig::from_env()?)?;
//!
//! let metadata = client
//!     .call::<sharing::GetSharedLinkMetadata>(&GetSharedLinkMetadataArg::new(url))
//!     .await?;
//! ```

mod executor;

pub use executor::Client;
