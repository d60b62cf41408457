//! Authentication classes for routes.
//!
//! Every route declares the set of credential kinds it accepts. The set is
//! built in `const` context by route tables, so [`AuthSet`] is a small bitset
//! with `const fn` builders rather than a collection.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A kind of credential a route can be called with.
///
/// ## Examples
///
/// ```
/// use schematic_define::AuthClass;
///
/// assert_eq!(AuthClass::Team.to_string(), "team");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AuthClass {
    /// No credentials.
    None,
    /// A user-linked OAuth bearer token.
    User,
    /// A team-linked OAuth bearer token.
    Team,
    /// App key and secret via HTTP basic auth.
    App,
}

impl AuthClass {
    const fn bit(self) -> u8 {
        match self {
            Self::None => 1,
            Self::User => 1 << 1,
            Self::Team => 1 << 2,
            Self::App => 1 << 3,
        }
    }
}

/// The set of [`AuthClass`]es a route accepts.
///
/// ## Examples
///
/// ```
/// use schematic_define::{AuthClass, AuthSet};
///
/// const APP_OR_USER: AuthSet = AuthSet::empty().with(AuthClass::App).with(AuthClass::User);
///
/// assert!(APP_OR_USER.contains(AuthClass::User));
/// assert!(!APP_OR_USER.contains(AuthClass::Team));
/// assert_eq!(APP_OR_USER.to_string(), "user, app");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AuthSet(u8);

impl AuthSet {
    /// A set accepting no credentials at all.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Shorthand for a set containing only [`AuthClass::User`].
    pub const fn user() -> Self {
        Self::empty().with(AuthClass::User)
    }

    /// Shorthand for a set containing only [`AuthClass::Team`].
    pub const fn team() -> Self {
        Self::empty().with(AuthClass::Team)
    }

    /// Returns a copy of this set with `class` added.
    pub const fn with(self, class: AuthClass) -> Self {
        Self(self.0 | class.bit())
    }

    /// Returns `true` if `class` is accepted.
    pub const fn contains(&self, class: AuthClass) -> bool {
        self.0 & class.bit() != 0
    }

    /// Returns `true` if no class is accepted.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates over the accepted classes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = AuthClass> {
        let set = *self;
        AuthClass::iter().filter(move |class| set.contains(*class))
    }
}

impl fmt::Display for AuthSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|class| class.to_string()).collect();
        f.write_str(&names.join(", "))
    }
}

impl FromIterator<AuthClass> for AuthSet {
    fn from_iter<I: IntoIterator<Item = AuthClass>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_contains_nothing() {
        let set = AuthSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
        assert_eq!(set.to_string(), "");
    }

    #[test]
    fn with_is_idempotent() {
        let once = AuthSet::user();
        let twice = AuthSet::user().with(AuthClass::User);
        assert_eq!(once, twice);
    }

    #[test]
    fn iter_follows_declaration_order() {
        let set = AuthSet::empty().with(AuthClass::App).with(AuthClass::None);
        let classes: Vec<_> = set.iter().collect();
        assert_eq!(classes, vec![AuthClass::None, AuthClass::App]);
    }

    #[test]
    fn collect_from_iterator() {
        let set: AuthSet = [AuthClass::Team, AuthClass::User].into_iter().collect();
        assert!(set.contains(AuthClass::Team));
        assert!(set.contains(AuthClass::User));
        assert!(!set.contains(AuthClass::App));
    }

    #[test]
    fn auth_class_serde_roundtrip() {
        let serialized = serde_json::to_string(&AuthClass::App).unwrap();
        assert_eq!(serialized, "\"app\"");
        let parsed: AuthClass = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, AuthClass::App);
    }
}
