//! Read positioning for sequential and partial reads.

use crate::config::ReadMode;

/// What the reader should do after a block has been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextRead {
    /// Read again from where the last read ended.
    Contiguous,
    /// Seek to this absolute offset, then read.
    SeekTo(u64),
    /// The last block was short; the source is exhausted.
    Finished,
}

/// Position state of one read pass.
///
/// After the n-th block (1-based) of `r` bytes the next read starts at
/// `offset + r + floor(|block_size * n * multiplier|)`. A zero multiplier
/// yields a plain sequential read. Arithmetic saturates at `u64::MAX`.
///
/// # Example
///
/// ```
/// use filedigest::{NextRead, ReadCursor};
///
/// let mut cursor = ReadCursor::partial(4, 1.0);
/// assert_eq!(cursor.record(4), NextRead::SeekTo(8));   // skip 4 * 1
/// assert_eq!(cursor.record(4), NextRead::SeekTo(20));  // skip 4 * 2
/// assert_eq!(cursor.record(1), NextRead::Finished);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadCursor {
    offset: u64,
    iteration: u64,
    block_size: usize,
    multiplier: f64,
}

impl ReadCursor {
    /// A cursor that reads every byte.
    pub fn sequential(block_size: usize) -> Self {
        Self::partial(block_size, 0.0)
    }

    /// A cursor that skips ahead after each block.
    pub fn partial(block_size: usize, multiplier: f64) -> Self {
        Self {
            offset: 0,
            iteration: 0,
            block_size,
            multiplier,
        }
    }

    /// A cursor for the given mode. Text mode reads sequentially.
    pub fn for_mode(block_size: usize, mode: ReadMode) -> Self {
        match mode {
            ReadMode::Partial { multiplier } => Self::partial(block_size, multiplier),
            ReadMode::Full | ReadMode::Text => Self::sequential(block_size),
        }
    }

    /// Moves the starting offset to `offset`. Skips are measured from there.
    pub fn starting_at(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Offset of the next read.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Number of reads recorded so far.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Bytes requested per read.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Distance skipped after the n-th read.
    pub fn skip_after(&self, n: u64) -> u64 {
        // `as` saturates for out-of-range floats.
        (self.block_size as f64 * n as f64 * self.multiplier)
            .abs()
            .floor() as u64
    }

    /// Records a completed read of `bytes_read` bytes and advances the offset.
    pub fn record(&mut self, bytes_read: usize) -> NextRead {
        self.iteration += 1;
        let skip = self.skip_after(self.iteration);
        self.offset = self
            .offset
            .saturating_add(bytes_read as u64)
            .saturating_add(skip);

        if bytes_read < self.block_size {
            NextRead::Finished
        } else if skip == 0 {
            NextRead::Contiguous
        } else {
            NextRead::SeekTo(self.offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_never_seeks() {
        let mut cursor = ReadCursor::sequential(8192);
        for i in 1..=10 {
            assert_eq!(cursor.record(8192), NextRead::Contiguous);
            assert_eq!(cursor.offset(), 8192 * i);
        }
        assert_eq!(cursor.record(100), NextRead::Finished);
        assert_eq!(cursor.offset(), 8192 * 10 + 100);
        assert_eq!(cursor.iteration(), 11);
    }

    #[test]
    fn test_partial_offsets() {
        // B = 8192, multiplier 1: reads at 0, 16384, 40960, 73728, ...
        let mut cursor = ReadCursor::partial(8192, 1.0);
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.record(8192), NextRead::SeekTo(16384));
        assert_eq!(cursor.record(8192), NextRead::SeekTo(40960));
        assert_eq!(cursor.record(8192), NextRead::SeekTo(73728));
    }

    #[test]
    fn test_fractional_multiplier_floors() {
        let cursor = ReadCursor::partial(10, 0.25);
        assert_eq!(cursor.skip_after(1), 2); // 2.5
        assert_eq!(cursor.skip_after(2), 5);
        assert_eq!(cursor.skip_after(3), 7); // 7.5
    }

    #[test]
    fn test_small_multiplier_may_not_skip() {
        let mut cursor = ReadCursor::partial(4, 0.1);
        // 4 * 1 * 0.1 = 0.4 -> no skip, read stays contiguous
        assert_eq!(cursor.record(4), NextRead::Contiguous);
        // 4 * 3 * 0.1 = 1.2 -> skip one byte
        assert_eq!(cursor.record(4), NextRead::Contiguous);
        assert_eq!(cursor.record(4), NextRead::SeekTo(13));
    }

    #[test]
    fn test_short_read_finishes_even_with_skip() {
        let mut cursor = ReadCursor::partial(16, 2.0);
        assert_eq!(cursor.record(0), NextRead::Finished);
        assert_eq!(cursor.offset(), 32);
    }

    #[test]
    fn test_starting_at() {
        let mut cursor = ReadCursor::partial(2, 1.0).starting_at(8);
        assert_eq!(cursor.offset(), 8);
        assert_eq!(cursor.record(2), NextRead::SeekTo(12));
        assert_eq!(cursor.record(2), NextRead::SeekTo(18));
    }

    #[test]
    fn test_offset_saturates() {
        let mut cursor = ReadCursor::partial(usize::MAX, f64::MAX);
        assert_eq!(cursor.record(usize::MAX), NextRead::SeekTo(u64::MAX));
        assert_eq!(cursor.record(usize::MAX), NextRead::SeekTo(u64::MAX));
    }

    #[test]
    fn test_for_mode() {
        let cursor = ReadCursor::for_mode(64, ReadMode::Text);
        assert_eq!(cursor.skip_after(5), 0);
        let cursor = ReadCursor::for_mode(64, ReadMode::Partial { multiplier: 1.0 });
        assert_eq!(cursor.skip_after(2), 128);
    }
}
