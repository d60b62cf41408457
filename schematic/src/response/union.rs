//! Tagged-union decoding.
//!
//! Polymorphic results arrive as a JSON object whose `.tag` field names the
//! active variant and whose remaining fields are that variant's payload.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// A decoded union object: the discriminator plus the active variant's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedUnionEnvelope {
    /// The `.tag` discriminator.
    #[serde(rename = ".tag")]
    pub tag: String,
    /// Every other field of the object.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl TaggedUnionEnvelope {
    /// Deserializes the payload fields into the variant's record type.
    ///
    /// ## Errors
    ///
    /// Returns an error if the fields do not match `T`.
    pub fn project<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.fields))
    }
}

/// A closed sum type decoded by branching on a `.tag` discriminator.
///
/// Unknown tags are not an error: servers add variants over time, so a tag
/// outside [`VARIANTS`](Self::VARIANTS) decodes to
/// [`unspecified`](Self::unspecified) and is logged at `debug` level.
/// A known tag with a malformed payload is an error.
///
/// ## Examples
///
/// ```
/// use schematic::response::{TaggedUnion, TaggedUnionEnvelope};
///
/// #[derive(Debug, PartialEq)]
/// enum Access {
///     Viewer,
///     Editor,
///     Unspecified,
/// }
///
/// impl TaggedUnion for Access {
///     const VARIANTS: &'static [&'static str] = &["viewer", "editor"];
///
///     fn decode_variant(envelope: TaggedUnionEnvelope) -> Result<Self, serde_json::Error> {
///         Ok(match envelope.tag.as_str() {
///             "viewer" => Self::Viewer,
///             "editor" => Self::Editor,
///             _ => Self::Unspecified,
///         })
///     }
///
///     fn unspecified() -> Self {
///         Self::Unspecified
///     }
/// }
/// ```
pub trait TaggedUnion: Sized {
    /// Tags this client knows how to decode.
    const VARIANTS: &'static [&'static str];

    /// Projects an envelope whose tag is listed in [`VARIANTS`](Self::VARIANTS).
    ///
    /// ## Errors
    ///
    /// Returns an error if the payload does not match the variant's schema.
    fn decode_variant(envelope: TaggedUnionEnvelope) -> Result<Self, serde_json::Error>;

    /// The value used for tags this client does not know.
    fn unspecified() -> Self;
}

pub(crate) fn decode_union<U: TaggedUnion>(
    envelope: TaggedUnionEnvelope,
) -> Result<U, serde_json::Error> {
    if !U::VARIANTS.contains(&envelope.tag.as_str()) {
        debug!(tag = %envelope.tag, known = ?U::VARIANTS, "unknown union tag");
        return Ok(U::unspecified());
    }
    U::decode_variant(envelope)
}

/// `Deserialize` implementation body for [`TaggedUnion`] types, so unions
/// nested inside other records decode the same way as top-level results.
///
/// ```ignore
/// impl<'de> Deserialize<'de> for SharedLinkMetadata {
///     fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
///         deserialize_union(deserializer)
///     }
/// }
/// ```
///
/// ## Errors
///
/// Returns the deserializer's error if the input is not a tagged object or a
/// known variant's payload is malformed.
pub fn deserialize_union<'de, D, U>(deserializer: D) -> Result<U, D::Error>
where
    D: Deserializer<'de>,
    U: TaggedUnion,
{
    let envelope = TaggedUnionEnvelope::deserialize(deserializer)?;
    decode_union(envelope).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Named {
        name: String,
    }

    #[derive(Debug, PartialEq)]
    enum Member {
        User(Named),
        Group(Named),
        Unspecified,
    }

    impl TaggedUnion for Member {
        const VARIANTS: &'static [&'static str] = &["user", "group"];

        fn decode_variant(envelope: TaggedUnionEnvelope) -> Result<Self, serde_json::Error> {
            match envelope.tag.as_str() {
                "user" => envelope.project().map(Self::User),
                "group" => envelope.project().map(Self::Group),
                _ => Ok(Self::Unspecified),
            }
        }

        fn unspecified() -> Self {
            Self::Unspecified
        }
    }

    impl<'de> Deserialize<'de> for Member {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserialize_union(deserializer)
        }
    }

    #[test]
    fn envelope_splits_tag_from_fields() {
        let envelope: TaggedUnionEnvelope =
            serde_json::from_str(r#"{".tag": "user", "name": "ada"}"#).unwrap();
        assert_eq!(envelope.tag, "user");
        assert_eq!(envelope.fields.len(), 1);
        assert_eq!(envelope.fields["name"], "ada");
    }

    #[test]
    fn nested_unions_decode_through_deserialize() {
        #[derive(Deserialize)]
        struct Listing {
            members: Vec<Member>,
        }

        let listing: Listing = serde_json::from_str(
            r#"{"members": [
                {".tag": "user", "name": "ada"},
                {".tag": "group", "name": "ops"},
                {".tag": "robot", "serial": 7}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            listing.members,
            vec![
                Member::User(Named {
                    name: "ada".to_string()
                }),
                Member::Group(Named {
                    name: "ops".to_string()
                }),
                Member::Unspecified,
            ]
        );
    }

    #[test]
    fn malformed_known_variant_is_an_error() {
        let parsed = serde_json::from_str::<Member>(r#"{".tag": "user", "name": 3}"#);
        assert!(parsed.is_err());
    }

    #[test]
    #[tracing_test::traced_test]
    fn unknown_tag_is_logged_at_debug() {
        let member: Member = serde_json::from_str(r#"{".tag": "robot"}"#).unwrap();
        assert_eq!(member, Member::Unspecified);
        assert!(logs_contain("unknown union tag"));
    }
}
