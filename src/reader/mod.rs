//! Block reading.
//!
//! - [`ReadCursor`] - Offset arithmetic for sequential and partial reads
//! - [`ChunkReader`] - Iterator that yields blocks from a [`std::io::Read`] source

mod cursor;
mod iter;

pub use cursor::{NextRead, ReadCursor};
pub use iter::ChunkReader;
