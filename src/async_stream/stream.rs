//! Async stream adapter for block reading.
//!
//! This module provides asynchronous block reading using the
//! `futures-io::AsyncRead` and `AsyncSeek` traits, making it runtime-agnostic
//! and compatible with tokio, async-std, smol, and other async runtimes.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use filedigest::{chunk_async, ReadCursor};
//! use futures_io::{AsyncRead, AsyncSeek};
//!
//! async fn demo<R: AsyncRead + AsyncSeek + Unpin>(reader: R) -> Result<(), filedigest::DigestError> {
//!     let mut stream = chunk_async(reader, ReadCursor::sequential(8192));
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("Chunk: {} bytes", chunk.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::io::{self, SeekFrom};
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::BytesMut;
use futures_core::Stream;
use futures_io::{AsyncRead, AsyncSeek};
use pin_project_lite::pin_project;
use tracing::trace;

use crate::chunk::Chunk;
use crate::error::DigestError;
use crate::reader::{NextRead, ReadCursor};

/// Starts repositioning a reader to an absolute offset.
type PollSeekFn<R> = fn(Pin<&mut R>, &mut Context<'_>, u64) -> Poll<io::Result<u64>>;

fn poll_seek_start<R: AsyncSeek>(
    reader: Pin<&mut R>,
    cx: &mut Context<'_>,
    offset: u64,
) -> Poll<io::Result<u64>> {
    reader.poll_seek(cx, SeekFrom::Start(offset))
}

/// Where the stream is in its read cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Seeking to the cursor offset before the next read.
    Seek(u64),
    /// Filling the current block.
    Read,
    /// Exhausted or failed.
    Done,
}

pin_project! {
    /// A stream that yields blocks from an async reader.
    ///
    /// Behaves like [`ChunkReader`](crate::ChunkReader): each item is one
    /// filled block, a short block ends the stream, and partial cursors
    /// seek between blocks. A stream built with [`ChunkStream::sequential`]
    /// never seeks and needs only `AsyncRead`. The stream suspends only
    /// while a read or seek is pending.
    #[derive(Debug)]
    pub struct ChunkStream<R> {
        #[pin]
        reader: R,
        cursor: ReadCursor,
        block: BytesMut,
        filled: usize,
        seek: Option<PollSeekFn<R>>,
        state: State,
    }
}

impl<R: AsyncRead + AsyncSeek> ChunkStream<R> {
    /// Creates a new stream positioned by `cursor`.
    pub fn new(reader: R, cursor: ReadCursor) -> Self {
        Self::build(reader, cursor, Some(poll_seek_start::<R>))
    }
}

impl<R: AsyncRead> ChunkStream<R> {
    /// Creates a stream that reads every byte in order and never seeks.
    pub fn sequential(reader: R, block_size: usize) -> Self {
        Self::build(reader, ReadCursor::sequential(block_size), None)
    }

    fn build(reader: R, cursor: ReadCursor, seek: Option<PollSeekFn<R>>) -> Self {
        Self {
            reader,
            block: BytesMut::with_capacity(cursor.block_size()),
            cursor,
            filled: 0,
            seek,
            state: State::Read,
        }
    }
}

impl<R: AsyncRead> Stream for ChunkStream<R> {
    type Item = Result<Chunk, DigestError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            match *this.state {
                State::Done => return Poll::Ready(None),

                State::Seek(offset) => {
                    let Some(seek) = *this.seek else {
                        *this.state = State::Done;
                        let e = io::Error::new(io::ErrorKind::Unsupported, "source is not seekable");
                        return Poll::Ready(Some(Err(e.into())));
                    };
                    match seek(this.reader.as_mut(), cx, offset) {
                        Poll::Pending => return Poll::Pending,
                        Poll::Ready(Err(e)) => {
                            *this.state = State::Done;
                            return Poll::Ready(Some(Err(e.into())));
                        }
                        Poll::Ready(Ok(_)) => {
                            trace!(offset, "seek");
                            *this.state = State::Read;
                        }
                    }
                }

                State::Read => {
                    let block_size = this.cursor.block_size();
                    if this.block.len() < block_size {
                        this.block.resize(block_size, 0);
                    }

                    let buf = &mut this.block[*this.filled..block_size];
                    match this.reader.as_mut().poll_read(cx, buf) {
                        Poll::Pending => return Poll::Pending,
                        Poll::Ready(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                        Poll::Ready(Err(e)) => {
                            *this.state = State::Done;
                            return Poll::Ready(Some(Err(e.into())));
                        }
                        Poll::Ready(Ok(n)) => {
                            *this.filled += n;
                            if n > 0 && *this.filled < block_size {
                                continue;
                            }
                        }
                    }

                    // Block is full, or the source hit EOF.
                    let n = std::mem::take(this.filled);
                    let offset = this.cursor.offset();
                    trace!(offset, len = n, "read block");

                    *this.state = match this.cursor.record(n) {
                        NextRead::Finished => State::Done,
                        NextRead::SeekTo(target) => State::Seek(target),
                        NextRead::Contiguous => State::Read,
                    };

                    if n == 0 {
                        return Poll::Ready(None);
                    }

                    this.block.truncate(n);
                    let data = this.block.split().freeze();
                    return Poll::Ready(Some(Ok(Chunk::new(data, offset))));
                }
            }
        }
    }
}

/// Creates a block stream from an async reader.
///
/// Uses `futures_io::AsyncRead` + `AsyncSeek` for runtime-agnostic async
/// I/O. This works with any async runtime (tokio, async-std, smol, etc.).
///
/// # Runtime Compatibility
///
/// For tokio users, `tokio_util::compat` converts a `tokio::fs::File` into
/// a `futures_io` reader:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use filedigest::{chunk_async, ReadCursor};
///
/// let file = tokio::fs::File::open("file").await?;
/// let stream = chunk_async(file.compat(), ReadCursor::partial(8192, 1.0));
/// ```
pub fn chunk_async<R: AsyncRead + AsyncSeek>(reader: R, cursor: ReadCursor) -> ChunkStream<R> {
    ChunkStream::new(reader, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use futures_util::io::Cursor;

    async fn collect<R: AsyncRead + Unpin>(stream: ChunkStream<R>) -> Vec<Chunk> {
        let items: Vec<_> = stream.collect().await;
        items.into_iter().collect::<Result<Vec<_>, _>>().unwrap()
    }

    #[tokio::test]
    async fn test_chunk_stream_empty() {
        let stream = chunk_async(Cursor::new(Vec::<u8>::new()), ReadCursor::sequential(8));
        assert!(collect(stream).await.is_empty());
    }

    #[tokio::test]
    async fn test_chunk_stream_sequential() {
        let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
        let stream = chunk_async(Cursor::new(data.clone()), ReadCursor::sequential(64));
        let chunks = collect(stream).await;

        let joined: Vec<u8> = chunks.iter().flat_map(|c| c.data.iter().copied()).collect();
        assert_eq!(joined, data);
        assert_eq!(chunks.last().map(Chunk::len), Some(1000 % 64));
    }

    #[tokio::test]
    async fn test_chunk_stream_partial_matches_sync() {
        let data: Vec<u8> = (0..100).collect();
        let stream = chunk_async(Cursor::new(data.clone()), ReadCursor::partial(10, 1.0));
        let chunks = collect(stream).await;

        let sync: Vec<_> = crate::ChunkReader::partial(std::io::Cursor::new(data), 10, 1.0)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(chunks, sync);
    }

    /// Hides `AsyncSeek` from the wrapped reader.
    struct ReadOnly<R>(R);

    impl<R: AsyncRead + Unpin> AsyncRead for ReadOnly<R> {
        fn poll_read(
            mut self: Pin<&mut Self>,
            cx: &mut Context<'_>,
            buf: &mut [u8],
        ) -> Poll<io::Result<usize>> {
            Pin::new(&mut self.0).poll_read(cx, buf)
        }
    }

    #[tokio::test]
    async fn test_sequential_stream_needs_no_seek() {
        let data: Vec<u8> = (0..300).map(|i| (i % 256) as u8).collect();
        let stream = ChunkStream::sequential(ReadOnly(Cursor::new(data.clone())), 32);
        let chunks = collect(stream).await;

        let joined: Vec<u8> = chunks.iter().flat_map(|c| c.data.iter().copied()).collect();
        assert_eq!(joined, data);
    }
}
