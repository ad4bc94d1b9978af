//! Digest orchestration.
//!
//! [`Digester`] binds an algorithm to a set of [`DigestOptions`] and picks
//! one of four strategies:
//!
//! | source | options                 | strategy                          |
//! |--------|-------------------------|-----------------------------------|
//! | string | any                     | one update over the UTF-8 bytes   |
//! | file   | `text_mode`             | sequential blocks → lines + `\n`  |
//! | file   | `partial`               | sampled blocks, growing skips     |
//! | file   | neither                 | sequential blocks, every byte     |
//!
//! `text_mode` wins over `partial`. Encoding is applied once, after
//! finalization. The free functions [`hash_file`], [`hash_file_sync`] and
//! [`hash_string_sync`] are shorthands for a one-off `Digester`.

mod access;
#[cfg(feature = "async-io")]
mod nonblocking;
mod sync;

use std::path::Path;

use tracing::debug;

use crate::config::{DigestOptions, ReadMode};
use crate::error::{DigestError, Result};
use crate::hash::{DigestAccumulator, DigestAlgorithm, DigestOutput};
use crate::lines::LINE_TERMINATOR;

pub use access::check_access;

/// Computes digests with a fixed algorithm and options.
///
/// A `Digester` holds no hashing state; every call owns its own
/// accumulator, cursor and line buffer, so one `Digester` can serve any
/// number of concurrent calls.
///
/// # Example
///
/// ```
/// use filedigest::{Digester, DigestAlgorithm, DigestOptions, Encoding};
///
/// let digester = Digester::new(DigestAlgorithm::Md5)
///     .with_options(DigestOptions::default().with_encoding(Encoding::Base64));
///
/// assert_eq!(
///     digester.hash_str("Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt")?,
///     "0LeVkV3m7EYwvyoNC9js0Q==",
/// );
/// # Ok::<(), filedigest::DigestError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Digester {
    algorithm: DigestAlgorithm,
    options: DigestOptions,
}

impl Digester {
    /// Creates a digester with default options.
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self {
            algorithm,
            options: DigestOptions::default(),
        }
    }

    /// Replaces the options.
    pub fn with_options(mut self, options: DigestOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the algorithm.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Returns the options.
    pub fn options(&self) -> &DigestOptions {
        &self.options
    }

    /// Hashes a byte slice in a single update.
    pub fn digest_bytes(&self, data: &[u8]) -> DigestOutput {
        DigestAccumulator::digest(self.algorithm, data)
    }

    /// Hashes the UTF-8 bytes of `text`. Read-mode options do not apply.
    pub fn digest_str(&self, text: &str) -> DigestOutput {
        self.digest_bytes(text.as_bytes())
    }

    /// Hashes `text` and renders the digest in the configured encoding.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InvalidOption`](crate::DigestError::InvalidOption)
    /// if the options do not validate.
    pub fn hash_str(&self, text: &str) -> Result<String> {
        self.options.validate()?;
        Ok(self.render(&self.digest_str(text)))
    }

    /// Renders `output` in the configured encoding.
    pub fn render(&self, output: &DigestOutput) -> String {
        output.encode(self.options.encoding())
    }

    /// Validates the options and resolves the read mode.
    fn prepare(&self) -> Result<ReadMode> {
        self.options.validate()?;
        let mode = self.options.read_mode();
        if self.options.partial() && mode == ReadMode::Text {
            debug!("partial read ignored in text mode");
        }
        Ok(mode)
    }
}

/// Rejects partial reads for sources that cannot seek.
fn require_sequential(mode: ReadMode) -> Result<()> {
    match mode {
        ReadMode::Partial { .. } => Err(DigestError::InvalidOption {
            message: "partial reads need a seekable source",
        }),
        ReadMode::Full | ReadMode::Text => Ok(()),
    }
}

/// Feeds one reassembled line and its normalized terminator.
fn absorb_line(acc: &mut DigestAccumulator, line: &[u8]) {
    acc.update(line);
    acc.update(LINE_TERMINATOR);
}

/// Hashes a string.
///
/// # Example
///
/// ```
/// use filedigest::{hash_string_sync, DigestAlgorithm, DigestOptions};
///
/// let digest = hash_string_sync("abc", DigestAlgorithm::Sha1, &DigestOptions::default())?;
/// assert_eq!(digest, "a9993e364706816aba3e25717850c26c9cd0d89d");
/// # Ok::<(), filedigest::DigestError>(())
/// ```
pub fn hash_string_sync(
    text: &str,
    algorithm: DigestAlgorithm,
    options: &DigestOptions,
) -> Result<String> {
    Digester::new(algorithm).with_options(*options).hash_str(text)
}

/// Hashes a file on the calling thread.
///
/// # Errors
///
/// [`DigestError::FileAccess`](crate::DigestError::FileAccess) if the path
/// is missing, a directory, or fails to open or read;
/// [`DigestError::InvalidOption`](crate::DigestError::InvalidOption) if
/// the options do not validate.
pub fn hash_file_sync(
    path: impl AsRef<Path>,
    algorithm: DigestAlgorithm,
    options: &DigestOptions,
) -> Result<String> {
    Digester::new(algorithm)
        .with_options(*options)
        .hash_file_sync(path)
}

/// Hashes a file with non-blocking reads on the tokio runtime.
///
/// Produces the same digest as [`hash_file_sync`] for the same inputs.
#[cfg(feature = "tokio")]
pub async fn hash_file(
    path: impl AsRef<Path>,
    algorithm: DigestAlgorithm,
    options: &DigestOptions,
) -> Result<String> {
    let digester = Digester::new(algorithm).with_options(*options);
    digester.hash_file(path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Encoding;
    use strum::IntoEnumIterator;

    const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt";

    #[test]
    fn test_string_vectors() {
        let options = DigestOptions::default();
        let cases = [
            (DigestAlgorithm::Md5, "d0b795915de6ec4630bf2a0d0bd8ecd1"),
            (DigestAlgorithm::Sha1, "c387f597da3cce8492676e72ab488595871b7e58"),
            (
                DigestAlgorithm::Sha256,
                "1a7b9019e4af3bb3dbd038efdd1a22b5cf20623b99bb2f8cac563f67f508d303",
            ),
            (
                DigestAlgorithm::Sha512,
                "0193863115a0954f775e339d9dc6cd4264f1e44febcde2f4e171bbcf34c10561db9e1d3c2fa56132ef0c5691129c7daba28184c8016bf12d84ab0e277b9e6c47",
            ),
        ];
        for (algorithm, expected) in cases {
            assert_eq!(hash_string_sync(LOREM, algorithm, &options).unwrap(), expected);
        }
    }

    #[test]
    fn test_string_base64() {
        let options = DigestOptions::default().with_encoding(Encoding::Base64);
        assert_eq!(
            hash_string_sync(LOREM, DigestAlgorithm::Md5, &options).unwrap(),
            "0LeVkV3m7EYwvyoNC9js0Q=="
        );
    }

    #[test]
    fn test_string_ignores_read_mode() {
        let plain = DigestOptions::default();
        let text = plain.with_text_mode(true).with_partial(true);
        for algorithm in DigestAlgorithm::iter() {
            assert_eq!(
                hash_string_sync("a\r\nb", algorithm, &plain).unwrap(),
                hash_string_sync("a\r\nb", algorithm, &text).unwrap(),
            );
        }
    }

    #[test]
    fn test_string_matches_direct_digest() {
        let digester = Digester::new(DigestAlgorithm::Sha256);
        for text in ["", "é", LOREM, "line\n"] {
            assert_eq!(
                digester.hash_str(text).unwrap(),
                DigestAccumulator::digest(DigestAlgorithm::Sha256, text.as_bytes()).to_hex()
            );
        }
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = DigestOptions::default().with_partial_multiplier(-2.0);
        assert!(matches!(
            hash_string_sync("x", DigestAlgorithm::Md5, &options),
            Err(DigestError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_prepare_text_wins() {
        let digester = Digester::new(DigestAlgorithm::Md5).with_options(
            DigestOptions::default()
                .with_partial(true)
                .with_text_mode(true),
        );
        assert_eq!(digester.prepare().unwrap(), ReadMode::Text);
    }
}
