//! Digest provider.
//!
//! Wraps the RustCrypto hashers behind a single dynamic interface:
//!
//! - [`DigestAlgorithm`] - Selects MD5, SHA-1, SHA-256 or SHA-512
//! - [`DigestAccumulator`] - Running state fed with `update()`
//! - [`DigestOutput`] - Finalized bytes, rendered as hex or base64

mod accumulator;
mod algorithm;
mod output;

pub use accumulator::DigestAccumulator;
pub use algorithm::DigestAlgorithm;
pub use output::DigestOutput;
