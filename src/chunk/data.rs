//! A block read from a source.

use std::fmt;
use std::ops::Range;

use bytes::Bytes;

/// One block handed from a reader to the digest, tagged with where it was
/// read from.
///
/// Full and text reads produce chunks that tile the source; partial reads
/// leave gaps between them.
///
/// # Example
///
/// ```
/// use filedigest::Chunk;
///
/// let first = Chunk::new(&b"abcd"[..], 0);
/// let second = Chunk::new(&b"ijkl"[..], 8);
///
/// assert_eq!(second.range(), 8..12);
/// assert_eq!(second.gap_after(&first), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Bytes read in this block. Never longer than the block size.
    pub data: Bytes,

    /// Source offset of the first byte.
    pub offset: u64,
}

impl Chunk {
    /// Wraps `data` read at `offset`.
    pub fn new(data: impl Into<Bytes>, offset: u64) -> Self {
        Self {
            data: data.into(),
            offset,
        }
    }

    /// Number of bytes in the block.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a zero-length block.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Offset one past the last byte.
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.data.len() as u64)
    }

    /// Source range covered by the block.
    pub fn range(&self) -> Range<u64> {
        self.offset..self.end()
    }

    /// Bytes skipped between the end of `previous` and the start of this
    /// block. Zero for contiguous reads.
    pub fn gap_after(&self, previous: &Chunk) -> u64 {
        self.offset.saturating_sub(previous.end())
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes at {}", self.len(), self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        let chunk = Chunk::new(&b"block"[..], 4096);
        assert_eq!(chunk.len(), 5);
        assert_eq!(chunk.end(), 4101);
        assert_eq!(chunk.range(), 4096..4101);
    }

    #[test]
    fn test_zero_length() {
        let chunk = Chunk::new(Bytes::new(), 7);
        assert!(chunk.is_empty());
        assert_eq!(chunk.range(), 7..7);
    }

    #[test]
    fn test_gap_after() {
        let a = Chunk::new(&b"xx"[..], 0);
        let b = Chunk::new(&b"yy"[..], 2);
        let c = Chunk::new(&b"zz"[..], 10);
        assert_eq!(b.gap_after(&a), 0);
        assert_eq!(c.gap_after(&b), 6);
        // Out-of-order input saturates.
        assert_eq!(a.gap_after(&c), 0);
    }

    #[test]
    fn test_display() {
        let chunk = Chunk::new(&b"abc"[..], 100);
        assert_eq!(chunk.to_string(), "3 bytes at 100");
    }
}
