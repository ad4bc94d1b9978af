//! Sliding-window line buffer.

/// Line feed, the only line terminator.
const LF: u8 = b'\n';

/// Carriage return, stripped when it immediately precedes a line feed.
const CR: u8 = b'\r';

/// A byte buffer holding the bytes that have not yet formed a complete line.
///
/// Bytes are appended at the back; complete lines are consumed from the front
/// by advancing a read cursor instead of reallocating. Consumed bytes are
/// reclaimed by shifting the live window to the front on the next append.
///
/// A second cursor remembers how far the buffer has already been searched for
/// a line feed, so a long line spanning many appends is scanned only once.
///
/// # Example
///
/// ```
/// use filedigest::LineBuffer;
///
/// let mut buffer = LineBuffer::new();
/// buffer.extend_from_slice(b"one\r\ntw");
/// assert_eq!(buffer.lines().collect::<Vec<_>>(), vec![&b"one"[..]]);
///
/// buffer.extend_from_slice(b"o\nthree");
/// assert_eq!(buffer.lines().collect::<Vec<_>>(), vec![&b"two"[..]]);
///
/// assert_eq!(buffer.take_remaining(), Some(&b"three"[..]));
/// ```
#[derive(Debug, Default, Clone)]
pub struct LineBuffer {
    data: Vec<u8>,
    /// Start of the unconsumed window.
    start: usize,
    /// Everything in `start..scanned` is known to contain no line feed.
    scanned: usize,
}

impl LineBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            start: 0,
            scanned: 0,
        }
    }

    /// Appends bytes after reclaiming any consumed prefix.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.compact();
        self.data.extend_from_slice(bytes);
    }

    /// Number of unconsumed bytes.
    pub fn len(&self) -> usize {
        self.data.len() - self.start
    }

    /// Returns true if every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The unconsumed bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[self.start..]
    }

    /// Returns an iterator over the complete lines currently buffered.
    ///
    /// Each line is yielded without its `\n` and without one `\r`
    /// directly before it. A lone `\r` is ordinary content. Lines are
    /// consumed as the iterator advances; lines not pulled stay buffered.
    pub fn lines(&mut self) -> Lines<'_> {
        Lines {
            data: &self.data,
            start: &mut self.start,
            scanned: &mut self.scanned,
        }
    }

    /// Consumes and returns whatever is left, if anything.
    ///
    /// Used once the source is exhausted: the remainder is a final line
    /// without terminator. An empty remainder yields `None`.
    pub fn take_remaining(&mut self) -> Option<&[u8]> {
        if self.is_empty() {
            return None;
        }
        let start = self.start;
        self.start = self.data.len();
        self.scanned = self.start;
        Some(&self.data[start..])
    }

    /// Drops all buffered bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
        self.start = 0;
        self.scanned = 0;
    }

    /// Moves the unconsumed window to the front of the allocation.
    fn compact(&mut self) {
        if self.start == 0 {
            return;
        }
        if self.start == self.data.len() {
            self.clear();
            return;
        }
        self.data.copy_within(self.start.., 0);
        self.data.truncate(self.data.len() - self.start);
        self.scanned -= self.start;
        self.start = 0;
    }
}

/// Iterator over the complete lines of a [`LineBuffer`].
///
/// Created by [`LineBuffer::lines`].
#[derive(Debug)]
pub struct Lines<'a> {
    data: &'a [u8],
    start: &'a mut usize,
    scanned: &'a mut usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.data;
        let begin = *self.start;
        let from = (*self.scanned).max(begin);

        let Some(pos) = data[from..].iter().position(|&b| b == LF) else {
            *self.scanned = data.len();
            return None;
        };

        let lf = from + pos;
        let end = if lf > begin && data[lf - 1] == CR {
            lf - 1
        } else {
            lf
        };

        *self.start = lf + 1;
        *self.scanned = lf + 1;
        Some(&data[begin..end])
    }
}
