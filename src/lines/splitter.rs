//! Line reassembly engine - LineSplitter with streaming API.
//!
//! This module turns a stream of byte chunks into text lines:
//!
//! - [`LineSplitter`] - Stateful splitter that carries partial lines between chunks
//! - `push()` - Feed a chunk of any size, get the lines it completes
//! - `finish()` - Flush the trailing unterminated line when the stream ends
//!
//! # Example
//!
//! ```
//! use filedigest::LineSplitter;
//!
//! let mut splitter = LineSplitter::new();
//! let mut lines: Vec<Vec<u8>> = Vec::new();
//!
//! for chunk in [&b"first\r\nsec"[..], &b"ond\nthi"[..], &b"rd"[..]] {
//!     lines.extend(splitter.push(chunk).map(<[u8]>::to_vec));
//! }
//! lines.extend(splitter.finish().map(<[u8]>::to_vec));
//!
//! assert_eq!(lines, vec![b"first".to_vec(), b"second".to_vec(), b"third".to_vec()]);
//! ```

use crate::buffer::{LineBuffer, Lines};

/// Terminator appended to every line before it is hashed.
pub const LINE_TERMINATOR: &[u8] = b"\n";

/// A splitter that reassembles lines across chunk boundaries.
///
/// # Streaming API
///
/// - Call `push()` with each chunk in order
/// - Iterate the returned [`Lines`] to take the lines completed so far
/// - Call `finish()` when the stream ends to take the final line
///
/// # Determinism
///
/// The lines produced depend only on the concatenated input, not on how it
/// was split into chunks. A `\r\n` pair split across two chunks is still
/// recognized as one terminator.
///
/// # Line rules
///
/// - `\n` ends a line; one `\r` directly before it is dropped
/// - a lone `\r` is ordinary content
/// - empty lines are yielded like any other line
/// - bytes are passed through undecoded
#[derive(Debug, Default)]
pub struct LineSplitter {
    buffer: LineBuffer,
    lines_emitted: u64,
}

impl LineSplitter {
    /// Creates a new splitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new splitter whose buffer starts with `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: LineBuffer::with_capacity(capacity),
            lines_emitted: 0,
        }
    }

    /// Pushes a chunk and returns the lines it completes.
    ///
    /// Lines left unread in the returned iterator stay buffered and come
    /// out of the next `push()` or `finish()`.
    pub fn push(&mut self, data: &[u8]) -> Lines<'_> {
        self.buffer.extend_from_slice(data);
        self.buffer.lines()
    }

    /// Pushes a chunk and hands every completed line to `f`.
    pub fn push_with<F>(&mut self, data: &[u8], mut f: F)
    where
        F: FnMut(&[u8]),
    {
        self.buffer.extend_from_slice(data);
        for line in self.buffer.lines() {
            self.lines_emitted += 1;
            f(line);
        }
    }

    /// Finalizes the stream and returns the trailing line, if any.
    ///
    /// Returns `None` when the input ended exactly after a line feed. After
    /// `finish()` the splitter is empty and can be reused.
    pub fn finish(&mut self) -> Option<&[u8]> {
        let tail = self.buffer.take_remaining();
        if tail.is_some() {
            self.lines_emitted += 1;
        }
        tail
    }

    /// Number of bytes buffered while waiting for a line feed.
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    /// Number of lines handed out through `push_with()` and `finish()`.
    pub fn lines_emitted(&self) -> u64 {
        self.lines_emitted
    }
}
