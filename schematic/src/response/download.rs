//! Download results.

use std::fmt;

use bytes::{Bytes, BytesMut};
use futures::TryStreamExt;

use crate::error::ClientError;
use crate::transport::ByteStream;

/// Result of a download-style route: decoded metadata plus the raw content.
///
/// `result` is available before `content` is read. The stream yields the
/// transport's bytes untouched; dropping it releases the connection.
pub struct Download<T> {
    /// Decoded result metadata.
    pub result: T,
    /// The response body.
    pub content: ByteStream,
}

impl<T> Download<T> {
    /// Reads the whole content stream into memory.
    ///
    /// ## Errors
    ///
    /// Returns the first error the stream yields.
    pub async fn collect(self) -> Result<(T, Bytes), ClientError> {
        let Self { result, content } = self;
        let buf = content
            .try_fold(BytesMut::new(), |mut buf, chunk| async move {
                buf.extend_from_slice(&chunk);
                Ok(buf)
            })
            .await?;
        Ok((result, buf.freeze()))
    }
}

impl<T: fmt::Debug> fmt::Debug for Download<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Download")
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use futures::StreamExt;

    #[tokio::test]
    async fn collect_concatenates_chunks() {
        let chunks = vec![
            Ok(Bytes::from_static(b"hello ")),
            Ok(Bytes::from_static(b"world")),
        ];
        let download = Download {
            result: "meta",
            content: stream::iter(chunks).boxed(),
        };

        let (result, bytes) = download.collect().await.unwrap();
        assert_eq!(result, "meta");
        assert_eq!(&bytes[..], b"hello world");
    }

    #[tokio::test]
    async fn collect_propagates_stream_errors() {
        let chunks = vec![
            Ok(Bytes::from_static(b"partial")),
            Err(ClientError::Connection("reset".to_string())),
        ];
        let download = Download {
            result: (),
            content: stream::iter(chunks).boxed(),
        };

        let err = download.collect().await.unwrap_err();
        assert!(matches!(err, ClientError::Connection(_)));
    }

    #[test]
    fn debug_omits_content() {
        let download = Download {
            result: 7,
            content: stream::empty().boxed(),
        };
        assert_eq!(format!("{download:?}"), "Download { result: 7, .. }");
    }
}
