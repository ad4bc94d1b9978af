//! Synchronous block reader - ChunkReader.
//!
//! [`ChunkReader`] is an iterator that yields [`Chunk`]s from any
//! [`std::io::Read`] source, positioned by a [`ReadCursor`]. Sequential
//! reading needs only `Read`; partial reading also needs [`std::io::Seek`].
//!
//! # Example
//!
//! ```no_run
//! use filedigest::ChunkReader;
//! use std::io::stdin;
//!
//! for chunk in ChunkReader::sequential(stdin().lock(), 8192) {
//!     let chunk = chunk?;
//!     println!("{} bytes @ {}", chunk.len(), chunk.offset);
//! }
//! # Ok::<(), filedigest::DigestError>(())
//! ```

use std::io::{self, Read, Seek, SeekFrom};

use bytes::BytesMut;
use tracing::trace;

use super::{NextRead, ReadCursor};
use crate::chunk::Chunk;
use crate::error::DigestError;

/// Repositions a reader to an absolute offset.
type SeekFn<R> = fn(&mut R, u64) -> io::Result<u64>;

fn seek_start<R: Seek>(reader: &mut R, offset: u64) -> io::Result<u64> {
    reader.seek(SeekFrom::Start(offset))
}

/// An iterator that yields blocks from a reader.
///
/// Each step fills one block of `block_size` bytes, retrying short reads
/// until the block is full or the source returns 0. A block shorter than
/// `block_size` ends the iteration. Between blocks the cursor may request a
/// seek (partial mode); sequential cursors never seek, so pipes and other
/// unseekable sources work with [`ChunkReader::sequential`].
///
/// An empty source yields no chunks.
///
/// # Example
///
/// ```
/// use filedigest::ChunkReader;
/// use std::io::Cursor;
///
/// let data: Vec<u8> = (0..20).collect();
/// let chunks: Vec<_> = ChunkReader::partial(Cursor::new(data), 4, 1.0)
///     .collect::<Result<_, _>>()?;
///
/// // reads at 0, 8, 20 (EOF)
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[1].offset, 8);
/// assert_eq!(&chunks[1].data[..], &[8, 9, 10, 11]);
/// # Ok::<(), filedigest::DigestError>(())
/// ```
#[derive(Debug)]
pub struct ChunkReader<R> {
    reader: R,
    cursor: ReadCursor,
    block: BytesMut,
    seek: Option<SeekFn<R>>,
    seek_to: Option<u64>,
    finished: bool,
}

impl<R: Read + Seek> ChunkReader<R> {
    /// Creates a reader positioned by `cursor`.
    pub fn new(reader: R, cursor: ReadCursor) -> Self {
        Self::build(reader, cursor, Some(seek_start::<R>))
    }

    /// Creates a reader that skips ahead after each block.
    pub fn partial(reader: R, block_size: usize, multiplier: f64) -> Self {
        Self::new(reader, ReadCursor::partial(block_size, multiplier))
    }
}

impl<R: Read> ChunkReader<R> {
    /// Creates a reader that reads every byte in order and never seeks.
    pub fn sequential(reader: R, block_size: usize) -> Self {
        Self::build(reader, ReadCursor::sequential(block_size), None)
    }

    fn build(reader: R, cursor: ReadCursor, seek: Option<SeekFn<R>>) -> Self {
        Self {
            reader,
            block: BytesMut::with_capacity(cursor.block_size()),
            cursor,
            seek,
            seek_to: None,
            finished: false,
        }
    }

    /// Reads until the block is full or the source is exhausted.
    fn fill_block(&mut self) -> io::Result<usize> {
        let block_size = self.cursor.block_size();
        self.block.clear();
        self.block.resize(block_size, 0);

        let mut filled = 0;
        while filled < block_size {
            match self.reader.read(&mut self.block[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        self.block.truncate(filled);
        Ok(filled)
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = Result<Chunk, DigestError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(offset) = self.seek_to.take() {
            trace!(offset, "seek");
            let sought = match self.seek {
                Some(seek) => seek(&mut self.reader, offset),
                None => Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "source is not seekable",
                )),
            };
            if let Err(e) = sought {
                self.finished = true;
                return Some(Err(e.into()));
            }
        }

        let offset = self.cursor.offset();
        let n = match self.fill_block() {
            Ok(n) => n,
            Err(e) => {
                self.finished = true;
                return Some(Err(e.into()));
            }
        };
        trace!(offset, len = n, "read block");

        match self.cursor.record(n) {
            NextRead::Finished => self.finished = true,
            NextRead::SeekTo(target) => self.seek_to = Some(target),
            NextRead::Contiguous => {}
        }

        if n == 0 {
            return None;
        }

        // Split off the filled block; the allocation is reclaimed on the
        // next `resize` once the previous chunk has been dropped.
        let data = self.block.split().freeze();
        Some(Ok(Chunk::new(data, offset)))
    }
}
