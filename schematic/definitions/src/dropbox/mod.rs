//! Dropbox API v2 route tables.
//!
//! - [`paper`] - legacy Paper docs (17 routes, all deprecated)
//! - [`sharing`] - shared links, files and folders (42 routes)
//! - [`file_properties`] - property groups and templates (16 routes)
//! - [`async_job`] - records shared by routes that run in the background

pub mod async_job;
pub mod file_properties;
pub mod paper;
pub mod sharing;

use schematic::RouteDescriptor;

/// Every route of every namespace in this module.
pub fn all_routes() -> impl Iterator<Item = &'static RouteDescriptor> {
    paper::ROUTES
        .iter()
        .chain(sharing::ROUTES)
        .chain(file_properties::ROUTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn endpoints_are_unique_across_namespaces() {
        let endpoints: HashSet<_> = all_routes().map(|r| r.endpoint()).collect();
        assert_eq!(endpoints.len(), 17 + 42 + 16);
    }

    #[test]
    fn replacements_resolve_within_namespace() {
        for route in all_routes() {
            if let Some(replacement) = route.deprecation.and_then(|d| d.replacement) {
                assert!(
                    all_routes()
                        .any(|r| r.namespace == route.namespace && r.name == replacement),
                    "{} points at unknown route {replacement}",
                    route.name
                );
            }
        }
    }
}
