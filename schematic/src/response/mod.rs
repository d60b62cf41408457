//! Response decoding strategies.
//!
//! A route's `Format` decides how a success body becomes a typed value:
//!
//! - [`JsonFormat`] - a single concrete record (or `Vec` of records)
//! - [`UnionFormat`] - a `.tag`-discriminated union, see [`TaggedUnion`]
//! - [`EmptyFormat`] - routes with no result
//!
//! Download routes pair the decoded value with the raw body in [`Download`].

mod download;
mod format;
mod union;

pub use download::Download;
pub use format::{EmptyFormat, JsonFormat, ResponseFormat, UnionFormat};
pub use union::{TaggedUnion, TaggedUnionEnvelope, deserialize_union};
