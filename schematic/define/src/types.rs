//! Core types for route tables.
//!
//! - [`RouteDescriptor`] - Static metadata for one remote operation
//! - [`Deprecation`] - Advisory information attached to retired routes

use std::fmt;

use crate::auth::AuthSet;
use crate::style::{HostClass, WireStyle};

/// Deprecation advisory for a route.
///
/// ## Examples
///
/// ```
/// use schematic_define::Deprecation;
///
/// const RETIRED: Deprecation = Deprecation::retired();
/// const REPLACED: Deprecation = Deprecation::replaced_by("ListSharedLinks");
///
/// assert_eq!(RETIRED.replacement, None);
/// assert_eq!(REPLACED.replacement, Some("ListSharedLinks"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deprecation {
    /// Name of the route callers should move to, if there is one.
    pub replacement: Option<&'static str>,
}

impl Deprecation {
    /// A deprecated route with no successor.
    pub const fn retired() -> Self {
        Self { replacement: None }
    }

    /// A deprecated route superseded by the route named `replacement`.
    pub const fn replaced_by(replacement: &'static str) -> Self {
        Self {
            replacement: Some(replacement),
        }
    }
}

/// Static description of how to reach one remote operation.
///
/// Descriptors are built in `const` context by route tables and copied freely;
/// building one never fails. Use [`crate::validate_routes`] in tests to check a
/// whole table for malformed paths and duplicates.
///
/// ## Examples
///
/// ```
/// use schematic_define::{AuthSet, HostClass, RouteDescriptor, WireStyle};
///
/// const DOCS_ARCHIVE: RouteDescriptor = RouteDescriptor {
///     name: "DocsArchive",
///     namespace: "paper",
///     path: "docs/archive",
///     style: WireStyle::Rpc,
///     host: HostClass::Api,
///     auth: AuthSet::user(),
///     extra_headers: &[],
///     deprecation: None,
/// };
///
/// assert_eq!(DOCS_ARCHIVE.endpoint(), "paper/docs/archive");
/// assert!(!DOCS_ARCHIVE.is_deprecated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteDescriptor {
    /// Logical operation name in PascalCase (e.g., "GetSharedLinkMetadata").
    pub name: &'static str,
    /// Namespace the route belongs to (e.g., "sharing").
    pub namespace: &'static str,
    /// Wire route within the namespace (e.g., "list_folders/continue").
    pub path: &'static str,
    /// How the argument and result travel.
    pub style: WireStyle,
    /// Which host family serves the route.
    pub host: HostClass,
    /// Accepted credential kinds.
    pub auth: AuthSet,
    /// Headers sent with every call of this route.
    ///
    /// These override client-level default headers with the same name
    /// (case-insensitive comparison).
    pub extra_headers: &'static [(&'static str, &'static str)],
    /// Set when the route is deprecated.
    pub deprecation: Option<Deprecation>,
}

impl RouteDescriptor {
    /// Returns `"{namespace}/{path}"`, the route's location below the API
    /// version prefix.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.namespace, self.path)
    }

    /// Returns `true` if calls to this route should emit an advisory.
    pub const fn is_deprecated(&self) -> bool {
        self.deprecation.is_some()
    }
}

impl fmt::Display for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.namespace, self.path, self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthClass;

    const GET_SHARED_LINK_FILE: RouteDescriptor = RouteDescriptor {
        name: "GetSharedLinkFile",
        namespace: "sharing",
        path: "get_shared_link_file",
        style: WireStyle::Download,
        host: HostClass::Content,
        auth: AuthSet::user(),
        extra_headers: &[],
        deprecation: None,
    };

    #[test]
    fn endpoint_joins_namespace_and_path() {
        assert_eq!(
            GET_SHARED_LINK_FILE.endpoint(),
            "sharing/get_shared_link_file"
        );
    }

    #[test]
    fn display_includes_style() {
        assert_eq!(
            GET_SHARED_LINK_FILE.to_string(),
            "sharing/get_shared_link_file (download)"
        );
    }

    #[test]
    fn deprecation_is_reported() {
        let route = RouteDescriptor {
            deprecation: Some(Deprecation::replaced_by("ListSharedLinks")),
            ..GET_SHARED_LINK_FILE
        };
        assert!(route.is_deprecated());
        assert_eq!(
            route.deprecation.and_then(|d| d.replacement),
            Some("ListSharedLinks")
        );
    }

    #[test]
    fn descriptor_is_copy() {
        let copy = GET_SHARED_LINK_FILE;
        assert_eq!(copy, GET_SHARED_LINK_FILE);
        assert!(copy.auth.contains(AuthClass::User));
    }
}
