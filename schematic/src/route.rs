//! Typed routes.
//!
//! Each remote operation is a zero-sized type implementing [`Route`], which
//! ties its [`RouteDescriptor`] to its argument, result format and error
//! types. One of the marker traits [`Rpc`], [`Upload`] or [`Download`] fixes
//! which client method can call it. Route types are declared in bulk with
//! [`routes!`](crate::routes).

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::RouteDescriptor;
use crate::response::ResponseFormat;

/// A remote operation.
pub trait Route: Send + Sync + 'static {
    /// Static description of how to reach the operation.
    const DESCRIPTOR: RouteDescriptor;

    /// Argument, serialized as JSON.
    type Arg: Serialize + Send + Sync;

    /// How a success body is decoded.
    type Format: ResponseFormat;

    /// Route-specific error schema.
    type Error: DeserializeOwned + Send;
}

/// Decoded result type of route `R`.
pub type Output<R> = <<R as Route>::Format as ResponseFormat>::Output;

/// Routes whose argument is the request body and result the response body.
pub trait Rpc: Route {}

/// Routes that send a raw content body alongside a header argument.
pub trait Upload: Route {}

/// Routes that return a raw content body alongside a header result.
pub trait Download: Route {}

/// Declares a namespace's route types and its `ROUTES` table.
///
/// Each entry names the wire style (`rpc`, `upload` or `download`), the type
/// to generate and the wire path, followed by its host class, accepted auth
/// classes, argument type, response format and error type. `headers` and
/// `deprecated` are optional. Every field ends with a comma.
///
/// ## Examples
///
/// ```
/// use schematic::error::Void;
/// use schematic::response::{EmptyFormat, JsonFormat};
/// use schematic::route::Route;
/// use schematic::{Deprecation, WireStyle};
///
/// #[derive(serde::Serialize)]
/// pub struct Ref {
///     pub doc_id: String,
/// }
///
/// schematic::routes! {
///     namespace = "paper";
///
///     /// Archives a doc.
///     rpc DocsArchive => "docs/archive" {
///         host: Api,
///         auth: [User],
///         arg: Ref,
///         result: EmptyFormat,
///         error: Void,
///         deprecated: Deprecation::retired(),
///     }
///
///     download DocsDownload => "docs/download" {
///         host: Api,
///         auth: [User],
///         arg: Ref,
///         result: JsonFormat<serde_json::Value>,
///         error: Void,
///         headers: [("Dropbox-API-Path-Root", "{\".tag\": \"home\"}")],
///     }
/// }
///
/// assert_eq!(ROUTES.len(), 2);
/// assert_eq!(DocsArchive::DESCRIPTOR.endpoint(), "paper/docs/archive");
/// assert!(DocsArchive::DESCRIPTOR.is_deprecated());
/// assert_eq!(DocsDownload::DESCRIPTOR.style, WireStyle::Download);
/// ```
#[macro_export]
macro_rules! routes {
    (@style rpc) => { $crate::WireStyle::Rpc };
    (@style upload) => { $crate::WireStyle::Upload };
    (@style download) => { $crate::WireStyle::Download };

    (@marker rpc $name:ident) => { impl $crate::route::Rpc for $name {} };
    (@marker upload $name:ident) => { impl $crate::route::Upload for $name {} };
    (@marker download $name:ident) => { impl $crate::route::Download for $name {} };

    (@deprecation) => { ::core::option::Option::None };
    (@deprecation $dep:expr) => { ::core::option::Option::Some($dep) };

    (
        namespace = $namespace:literal;
        $(
            $(#[$meta:meta])*
            $style:ident $name:ident => $path:literal {
                host: $host:ident,
                auth: [$($auth:ident),+ $(,)?],
                arg: $arg:ty,
                result: $format:ty,
                error: $error:ty,
                $(headers: [$(($header:literal, $value:literal)),* $(,)?],)?
                $(deprecated: $dep:expr,)?
            }
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl $crate::route::Route for $name {
                const DESCRIPTOR: $crate::RouteDescriptor = $crate::RouteDescriptor {
                    name: stringify!($name),
                    namespace: $namespace,
                    path: $path,
                    style: $crate::routes!(@style $style),
                    host: $crate::HostClass::$host,
                    auth: $crate::AuthSet::empty()$(.with($crate::AuthClass::$auth))+,
                    extra_headers: &[$($(($header, $value)),*)?],
                    deprecation: $crate::routes!(@deprecation $($dep)?),
                };

                type Arg = $arg;
                type Format = $format;
                type Error = $error;
            }

            $crate::routes!(@marker $style $name);
        )*

        /// Every route of this namespace, in declaration order.
        pub const ROUTES: &[$crate::RouteDescriptor] = &[
            $(<$name as $crate::route::Route>::DESCRIPTOR),*
        ];
    };
}
