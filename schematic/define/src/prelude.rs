//! Convenient re-exports for declaring route tables.
//!
//! ```
//! use schematic_define::prelude::*;
//!
//! const ARCHIVE: RouteDescriptor = RouteDescriptor {
//!     name: "DocsArchive",
//!     namespace: "paper",
//!     path: "docs/archive",
//!     style: WireStyle::Rpc,
//!     host: HostClass::Api,
//!     auth: AuthSet::user(),
//!     extra_headers: &[],
//!     deprecation: Some(Deprecation::retired()),
//! };
//!
//! assert!(ARCHIVE.is_deprecated());
//! ```

pub use crate::auth::{AuthClass, AuthSet};
pub use crate::style::{HostClass, WireStyle};
pub use crate::types::{Deprecation, RouteDescriptor};
pub use crate::validation::{validate_routes, RouteTableError};
