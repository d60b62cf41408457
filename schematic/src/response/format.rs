//! Response format trait and implementations.
//!
//! The [`ResponseFormat`] trait defines how to parse a success body into a
//! typed value. Each route names its format in its route table entry.

use std::future::Future;
use std::marker::PhantomData;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use super::union::{TaggedUnion, decode_union};
use crate::error::ValidationError;

/// Trait for response format parsing strategies.
///
/// Each format implements its own parsing logic, transforming a response
/// body into a typed output value.
///
/// ## Examples
///
/// ```
/// use schematic::response::{JsonFormat, ResponseFormat};
///
/// #[derive(serde::Deserialize)]
/// struct Cursor { cursor: String }
///
/// // The format type encodes both the parsing strategy and output type
/// type CursorResponse = JsonFormat<Cursor>;
///
/// fn cursor_of(output: <CursorResponse as ResponseFormat>::Output) -> String {
///     output.cursor
/// }
///
/// assert_eq!(cursor_of(Cursor { cursor: "c1".into() }), "c1");
/// ```
pub trait ResponseFormat: Send + Sync + 'static {
    /// The output type after parsing.
    type Output: Send;

    /// Parse a response body into the output type.
    fn parse(body: Bytes) -> impl Future<Output = Result<Self::Output, ValidationError>> + Send;
}

/// JSON response format with typed deserialization.
///
/// List results use `JsonFormat<Vec<T>>`.
///
/// ## Type Parameters
///
/// - `T`: The type to deserialize the JSON into. Must implement [`DeserializeOwned`].
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat<T>(PhantomData<fn() -> T>);

impl<T: DeserializeOwned + Send + 'static> ResponseFormat for JsonFormat<T> {
    type Output = T;

    async fn parse(body: Bytes) -> Result<Self::Output, ValidationError> {
        if body.is_empty() {
            return Err(ValidationError::EmptyBody);
        }
        serde_json::from_slice(&body).map_err(ValidationError::JsonParse)
    }
}

/// Tagged-union response format.
///
/// Decodes the `.tag` discriminator first and projects the remaining fields
/// into the active variant. Tags outside [`TaggedUnion::VARIANTS`] yield
/// [`TaggedUnion::unspecified`].
#[derive(Debug, Clone, Copy)]
pub struct UnionFormat<U>(PhantomData<fn() -> U>);

impl<U: TaggedUnion + Send + 'static> ResponseFormat for UnionFormat<U> {
    type Output = U;

    async fn parse(body: Bytes) -> Result<Self::Output, ValidationError> {
        if body.is_empty() {
            return Err(ValidationError::EmptyBody);
        }
        let envelope = serde_json::from_slice(&body)?;
        decode_union(envelope).map_err(ValidationError::JsonParse)
    }
}

/// Format for routes without a result. The body is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyFormat;

impl ResponseFormat for EmptyFormat {
    type Output = ();

    async fn parse(_body: Bytes) -> Result<Self::Output, ValidationError> {
        Ok(())
    }
}
