//! Wire styles and host classes.
//!
//! A route's [`WireStyle`] decides where its serialized argument travels and
//! whether a raw content body rides along with the request or the response.
//! Its [`HostClass`] decides which base URL the request is sent to.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How a route's argument and result are carried on the wire.
///
/// ## Examples
///
/// ```
/// use schematic_define::WireStyle;
///
/// assert_eq!(WireStyle::Upload.to_string(), "upload");
/// assert!(WireStyle::Upload.accepts_content());
/// assert!(WireStyle::Download.returns_content());
/// assert!(!WireStyle::Rpc.arg_in_header());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WireStyle {
    /// JSON argument as the request body, JSON result as the response body.
    Rpc,
    /// JSON argument in a header, raw content as the request body, JSON result
    /// as the response body.
    Upload,
    /// JSON argument in a header, JSON result in a response header, raw content
    /// as the response body.
    Download,
}

impl WireStyle {
    /// Returns `true` when the serialized argument is sent in a header rather
    /// than as the request body.
    pub const fn arg_in_header(&self) -> bool {
        matches!(self, Self::Upload | Self::Download)
    }

    /// Returns `true` when the request carries a raw content body.
    pub const fn accepts_content(&self) -> bool {
        matches!(self, Self::Upload)
    }

    /// Returns `true` when the response carries a raw content body.
    pub const fn returns_content(&self) -> bool {
        matches!(self, Self::Download)
    }
}

/// The family of hosts a route is served from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HostClass {
    /// RPC-style endpoints.
    Api,
    /// Content upload and download endpoints.
    Content,
    /// Long-poll notification endpoints.
    Notify,
}
