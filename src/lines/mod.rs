//! Line reassembly for text-mode hashing.
//!
//! - [`LineSplitter`] - Stateful splitter with `push()`/`finish()` API

mod splitter;

pub use splitter::{LINE_TERMINATOR, LineSplitter};
