//! Lazy byte stream backing `cat` output.
//!
//! The stream owns the open file handle. Consumers pull chunks at their
//! own pace with [`ByteStream::next_chunk`]; dropping the stream at any
//! point closes the handle. After end-of-file or an I/O error the handle
//! is released immediately and further pulls report end-of-stream.

use std::io;

use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Read size per pull. Consumers must not rely on chunk boundaries.
const CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug)]
pub struct ByteStream {
    file: Option<File>,
}

impl ByteStream {
    pub(crate) fn new(file: File) -> Self {
        Self { file: Some(file) }
    }

    /// Pull the next chunk. Returns `Ok(None)` once the file is exhausted.
    ///
    /// An I/O error closes the underlying handle and is returned once;
    /// subsequent pulls behave as end-of-stream.
    pub async fn next_chunk(&mut self) -> io::Result<Option<Vec<u8>>> {
        let Some(file) = self.file.as_mut() else {
            return Ok(None);
        };

        let mut buf = vec![0u8; CHUNK_SIZE];
        match file.read(&mut buf).await {
            Ok(0) => {
                self.file = None;
                Ok(None)
            }
            Ok(n) => {
                buf.truncate(n);
                Ok(Some(buf))
            }
            Err(err) => {
                self.file = None;
                Err(err)
            }
        }
    }

    /// Pull every remaining chunk and concatenate.
    pub async fn drain(mut self) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        while let Some(chunk) = self.next_chunk().await? {
            out.extend_from_slice(&chunk);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    async fn stream_over(content: &[u8]) -> (NamedTempFile, ByteStream) {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(content).unwrap();
        tmp.flush().unwrap();
        let file = File::open(tmp.path()).await.unwrap();
        (tmp, ByteStream::new(file))
    }

    #[tokio::test]
    async fn drain_matches_content() {
        let (_tmp, stream) = stream_over(b"hello stream").await;
        assert_eq!(stream.drain().await.unwrap(), b"hello stream");
    }

    #[tokio::test]
    async fn empty_file_finishes_immediately() {
        let (_tmp, mut stream) = stream_over(b"").await;
        assert!(stream.next_chunk().await.unwrap().is_none());
        // Exhausted streams stay exhausted.
        assert!(stream.next_chunk().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn large_content_arrives_in_multiple_chunks() {
        let content = vec![b'A'; CHUNK_SIZE * 2 + 17];
        let (_tmp, mut stream) = stream_over(&content).await;

        let mut chunks = 0;
        let mut total = Vec::new();
        while let Some(chunk) = stream.next_chunk().await.unwrap() {
            assert!(chunk.len() <= CHUNK_SIZE);
            total.extend_from_slice(&chunk);
            chunks += 1;
        }
        assert!(chunks >= 3);
        assert_eq!(total, content);
    }

    #[tokio::test]
    async fn multibyte_content_survives_chunking() {
        let content = "é".repeat(CHUNK_SIZE); // 2 bytes each, forces a split
        let (_tmp, stream) = stream_over(content.as_bytes()).await;
        let drained = stream.drain().await.unwrap();
        assert_eq!(String::from_utf8(drained).unwrap(), content);
    }

    #[tokio::test]
    async fn early_drop_releases_handle() {
        let (tmp, mut stream) = stream_over(&vec![b'x'; CHUNK_SIZE * 4]).await;
        let first = stream.next_chunk().await.unwrap().unwrap();
        assert_eq!(first.len(), CHUNK_SIZE);
        drop(stream);
        // The file is untouched and still removable after abandonment.
        tmp.close().unwrap();
    }
}
