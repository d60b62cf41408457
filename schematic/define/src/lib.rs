//! Schematic Route Primitives
//!
//! This crate provides the `const`-constructible data types that describe a
//! closed set of remote operations. Route tables in `schematic-definitions`
//! are built from these primitives, and the `schematic` runtime reads them to
//! decide how each call travels over the wire.
//!
//! ## Core Types
//!
//! - [`RouteDescriptor`] - Static metadata for one operation (name, namespace, path, style, host, auth)
//! - [`WireStyle`] - How the argument and result are carried (RPC, upload, download)
//! - [`HostClass`] - Which host family serves a route (API, content, notify)
//! - [`AuthClass`] / [`AuthSet`] - Credential kinds a route accepts
//! - [`Deprecation`] - Advisory attached to deprecated routes
//! - [`validate_routes`] - Table-level consistency check
//!
//! ## Examples
//!
//! ```
//! use schematic_define::{
//!     validate_routes, AuthClass, AuthSet, Deprecation, HostClass, RouteDescriptor, WireStyle,
//! };
//!
//! const ROUTES: &[RouteDescriptor] = &[
//!     RouteDescriptor {
//!         name: "GetSharedLinkMetadata",
//!         namespace: "sharing",
//!         path: "get_shared_link_metadata",
//!         style: WireStyle::Rpc,
//!         host: HostClass::Api,
//!         auth: AuthSet::empty().with(AuthClass::App).with(AuthClass::User),
//!         extra_headers: &[],
//!         deprecation: None,
//!     },
//!     RouteDescriptor {
//!         name: "GetSharedLinks",
//!         namespace: "sharing",
//!         path: "get_shared_links",
//!         style: WireStyle::Rpc,
//!         host: HostClass::Api,
//!         auth: AuthSet::user(),
//!         extra_headers: &[],
//!         deprecation: Some(Deprecation::replaced_by("ListSharedLinks")),
//!     },
//! ];
//!
//! assert!(validate_routes(ROUTES).is_ok());
//! assert_eq!(ROUTES[1].endpoint(), "sharing/get_shared_links");
//! ```

pub mod auth;
pub mod prelude;
pub mod style;
pub mod types;
pub mod validation;

// Re-export main types at crate root
pub use auth::{AuthClass, AuthSet};
pub use style::{HostClass, WireStyle};
pub use types::{Deprecation, RouteDescriptor};
pub use validation::{validate_routes, RouteTableError};
