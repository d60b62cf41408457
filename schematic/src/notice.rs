//! Deprecation notices.
//!
//! Calling a deprecated route emits one notice through the client's
//! [`Notifier`] before the request is dispatched.

use schematic_define::RouteDescriptor;
use tracing::warn;

/// Receives deprecation notices.
pub trait Notifier: Send + Sync {
    /// Called once per invocation of a deprecated route, before dispatch.
    fn notice(&self, route: &RouteDescriptor);
}

/// Logs deprecation notices at `warn` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notice(&self, route: &RouteDescriptor) {
        let Some(deprecation) = route.deprecation else {
            return;
        };
        match deprecation.replacement {
            Some(replacement) => warn!(
                route = route.name,
                endpoint = %route.endpoint(),
                replacement,
                "API `{}` is deprecated, use API `{}` instead",
                route.name,
                replacement
            ),
            None => warn!(
                route = route.name,
                endpoint = %route.endpoint(),
                "API `{}` is deprecated",
                route.name
            ),
        }
    }
}

/// Discards notices.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notice(&self, _route: &RouteDescriptor) {}
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notice(&self, route: &RouteDescriptor) {
        (**self).notice(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schematic_define::{AuthSet, Deprecation, HostClass, WireStyle};

    fn route(name: &'static str, deprecation: Option<Deprecation>) -> RouteDescriptor {
        RouteDescriptor {
            name,
            namespace: "sharing",
            path: "get_shared_links",
            style: WireStyle::Rpc,
            host: HostClass::Api,
            auth: AuthSet::user(),
            extra_headers: &[],
            deprecation,
        }
    }

    #[test]
    #[tracing_test::traced_test]
    fn names_the_replacement() {
        TracingNotifier.notice(&route(
            "GetSharedLinks",
            Some(Deprecation::replaced_by("ListSharedLinks")),
        ));
        assert!(logs_contain(
            "API `GetSharedLinks` is deprecated, use API `ListSharedLinks` instead"
        ));
    }

    #[test]
    #[tracing_test::traced_test]
    fn retired_route_has_no_replacement() {
        TracingNotifier.notice(&route("DocsArchive", Some(Deprecation::retired())));
        assert!(logs_contain("API `DocsArchive` is deprecated"));
        assert!(!logs_contain("instead"));
    }

    #[test]
    #[tracing_test::traced_test]
    fn current_route_is_silent() {
        TracingNotifier.notice(&route("ListSharedLinks", None));
        assert!(!logs_contain("deprecated"));
    }
}
