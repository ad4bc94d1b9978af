//! filedigest
//!
//! Streaming file and string digests for Rust.
//!
//! `filedigest` computes MD5, SHA-1, SHA-256 and SHA-512 digests of files and
//! strings and renders them as hex, base64 or base64url. Files are read in
//! bounded blocks, so memory use does not grow with file size. Three read
//! modes are supported:
//!
//! - full: every byte, in order
//! - text: line by line, with `\r\n` and `\n` hashed alike
//! - partial: sampled blocks with growing gaps, a fast fingerprint of large files
//!
//! The crate intentionally:
//! - does NOT walk directories
//! - does NOT verify against checksum files
//! - does NOT write anything to disk
//!
//! It only does one thing: **Read bytes → yield a digest**
//!
//! # Sync
//!
//! ```no_run
//! use filedigest::{hash_file_sync, DigestAlgorithm, DigestOptions, DigestError};
//!
//! fn main() -> Result<(), DigestError> {
//!     let options = DigestOptions::default().with_text_mode(true);
//!     let digest = hash_file_sync("notes.txt", DigestAlgorithm::Sha256, &options)?;
//!     println!("{digest}");
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "tokio")
//!
//! ```no_run
//! # #[cfg(feature = "tokio")]
//! # async fn demo() -> Result<(), filedigest::DigestError> {
//! use filedigest::{hash_file, DigestAlgorithm, DigestOptions, Encoding};
//!
//! let options = DigestOptions::default()
//!     .with_partial(true)
//!     .with_encoding(Encoding::Base64Url);
//! let digest = hash_file("video.mkv", DigestAlgorithm::Md5, &options).await?;
//! println!("{digest}");
//! # Ok(())
//! # }
//! ```
//!
//! # Strings
//!
//! ```
//! use filedigest::{hash_string_sync, DigestAlgorithm, DigestOptions};
//!
//! let digest = hash_string_sync("", DigestAlgorithm::Md5, &DigestOptions::default())?;
//! assert_eq!(digest, "d41d8cd98f00b204e9800998ecf8427e");
//! # Ok::<(), filedigest::DigestError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod chunk;
mod config;
mod digester;
mod error;
mod hash;
mod lines;
mod reader;

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use buffer::{LineBuffer, Lines};
pub use chunk::Chunk;
pub use config::{
    DEFAULT_BLOCK_SIZE, DEFAULT_PARTIAL_MULTIPLIER, DigestOptions, Encoding, MAX_BLOCK_SIZE,
    ReadMode,
};
pub use digester::{Digester, check_access, hash_file_sync, hash_string_sync};
pub use error::{DigestError, Result};
pub use hash::{DigestAccumulator, DigestAlgorithm, DigestOutput};
pub use lines::{LINE_TERMINATOR, LineSplitter};
pub use reader::{ChunkReader, NextRead, ReadCursor};

#[cfg(feature = "tokio")]
pub use digester::hash_file;

#[cfg(feature = "async-io")]
pub use async_stream::{ChunkStream, chunk_async};
