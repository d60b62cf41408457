//! Consistency checks for route tables.
//!
//! Route tables are `const` data, so malformed entries cannot be rejected at
//! construction time. [`validate_routes`] is meant to be called from a test in
//! each crate that declares a table.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::RouteDescriptor;

/// A problem found in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    /// Route name is empty.
    #[error("route name cannot be empty (path '{path}')")]
    EmptyName { path: &'static str },

    /// Route name must start with an alphabetic character.
    #[error("route name '{name}' must start with an alphabetic character")]
    InvalidNameStart { name: &'static str },

    /// Route name contains a character other than alphanumerics or `_`.
    #[error("route name '{name}' contains invalid character: '{character}'")]
    InvalidNameCharacter {
        name: &'static str,
        character: char,
    },

    /// Namespace is empty.
    #[error("route '{name}' has an empty namespace")]
    EmptyNamespace { name: &'static str },

    /// Path is empty or contains an empty or non-snake_case segment.
    #[error("route '{name}' has invalid path '{path}': segment '{segment}' is not lowercase snake_case")]
    InvalidPath {
        name: &'static str,
        path: &'static str,
        segment: &'static str,
    },

    /// Route accepts no credential kind at all.
    #[error("route '{name}' declares no auth class")]
    NoAuth { name: &'static str },

    /// Two routes in the same namespace share a path.
    #[error("duplicate route path '{namespace}/{path}'")]
    DuplicatePath {
        namespace: &'static str,
        path: &'static str,
    },

    /// Two routes share a logical name.
    #[error("duplicate route name '{name}'")]
    DuplicateName { name: &'static str },
}

/// Checks every descriptor in `routes`, stopping at the first problem.
///
/// ## Errors
///
/// Returns the first [`RouteTableError`] found, in table order.
///
/// ## Examples
///
/// ```
/// use schematic_define::{validate_routes, AuthSet, HostClass, RouteDescriptor, WireStyle};
///
/// let routes = [RouteDescriptor {
///     name: "ListFolders",
///     namespace: "sharing",
///     path: "list_folders",
///     style: WireStyle::Rpc,
///     host: HostClass::Api,
///     auth: AuthSet::user(),
///     extra_headers: &[],
///     deprecation: None,
/// }];
///
/// assert!(validate_routes(&routes).is_ok());
/// ```
pub fn validate_routes(routes: &[RouteDescriptor]) -> Result<(), RouteTableError> {
    let mut paths = HashSet::new();
    let mut names = HashSet::new();

    for route in routes {
        validate_name(route)?;

        if route.namespace.is_empty() {
            return Err(RouteTableError::EmptyNamespace { name: route.name });
        }

        validate_path(route)?;

        if route.auth.is_empty() {
            return Err(RouteTableError::NoAuth { name: route.name });
        }

        if !paths.insert((route.namespace, route.path)) {
            return Err(RouteTableError::DuplicatePath {
                namespace: route.namespace,
                path: route.path,
            });
        }

        if !names.insert(route.name) {
            return Err(RouteTableError::DuplicateName { name: route.name });
        }
    }

    Ok(())
}

fn validate_name(route: &RouteDescriptor) -> Result<(), RouteTableError> {
    let name = route.name;
    let mut chars = name.chars();

    match chars.next() {
        None => return Err(RouteTableError::EmptyName { path: route.path }),
        Some(c) if !c.is_alphabetic() => {
            return Err(RouteTableError::InvalidNameStart { name });
        }
        _ => {}
    }

    for c in chars {
        if !c.is_alphanumeric() && c != '_' {
            return Err(RouteTableError::InvalidNameCharacter { name, character: c });
        }
    }

    Ok(())
}

fn validate_path(route: &RouteDescriptor) -> Result<(), RouteTableError> {
    for segment in route.path.split('/') {
        if !is_snake_case(segment) {
            return Err(RouteTableError::InvalidPath {
                name: route.name,
                path: route.path,
                segment,
            });
        }
    }
    Ok(())
}

fn is_snake_case(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthSet;
    use crate::style::{HostClass, WireStyle};

    fn route(name: &'static str, path: &'static str) -> RouteDescriptor {
        RouteDescriptor {
            name,
            namespace: "sharing",
            path,
            style: WireStyle::Rpc,
            host: HostClass::Api,
            auth: AuthSet::user(),
            extra_headers: &[],
            deprecation: None,
        }
    }

    #[test]
    fn valid_table_passes() {
        let routes = [
            route("ListFolders", "list_folders"),
            route("ListFoldersContinue", "list_folders/continue"),
            route("RemoveFileMember2", "remove_file_member_2"),
        ];
        assert_eq!(validate_routes(&routes), Ok(()));
    }

    #[test]
    fn empty_table_passes() {
        assert_eq!(validate_routes(&[]), Ok(()));
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert_eq!(
            validate_routes(&[route("", "list_folders")]),
            Err(RouteTableError::EmptyName {
                path: "list_folders"
            })
        );
        assert_eq!(
            validate_routes(&[route("2Fast", "list_folders")]),
            Err(RouteTableError::InvalidNameStart { name: "2Fast" })
        );
        assert_eq!(
            validate_routes(&[route("List-Folders", "list_folders")]),
            Err(RouteTableError::InvalidNameCharacter {
                name: "List-Folders",
                character: '-'
            })
        );
    }

    #[test]
    fn invalid_paths_are_rejected() {
        for (path, segment) in [
            ("", ""),
            ("list_folders/", ""),
            ("/list_folders", ""),
            ("ListFolders", "ListFolders"),
            ("list-folders", "list-folders"),
            ("docs/_private", "_private"),
        ] {
            let err = validate_routes(&[route("ListFolders", path)]).unwrap_err();
            assert_eq!(
                err,
                RouteTableError::InvalidPath {
                    name: "ListFolders",
                    path,
                    segment
                },
                "path {path:?}"
            );
        }
    }

    #[test]
    fn missing_auth_is_rejected() {
        let mut descriptor = route("ListFolders", "list_folders");
        descriptor.auth = AuthSet::empty();
        assert_eq!(
            validate_routes(&[descriptor]),
            Err(RouteTableError::NoAuth {
                name: "ListFolders"
            })
        );
    }

    #[test]
    fn duplicate_path_is_rejected() {
        let routes = [
            route("ListFolders", "list_folders"),
            route("ListFoldersAgain", "list_folders"),
        ];
        let err = validate_routes(&routes).unwrap_err();
        assert_eq!(
            err,
            RouteTableError::DuplicatePath {
                namespace: "sharing",
                path: "list_folders"
            }
        );
        assert_eq!(err.to_string(), "duplicate route path 'sharing/list_folders'");
    }

    #[test]
    fn same_path_in_other_namespace_is_allowed() {
        let mut other = route("PaperListFolders", "list_folders");
        other.namespace = "paper";
        let routes = [route("ListFolders", "list_folders"), other];
        assert!(validate_routes(&routes).is_ok());
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let routes = [
            route("ListFolders", "list_folders"),
            route("ListFolders", "list_folders/continue"),
        ];
        assert_eq!(
            validate_routes(&routes),
            Err(RouteTableError::DuplicateName {
                name: "ListFolders"
            })
        );
    }
}
