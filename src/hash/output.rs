//! Finalized digest values.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

use super::DigestAlgorithm;
use crate::config::Encoding;

/// The finalized bytes of a digest.
///
/// Encoding is applied only when rendering, never while hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigestOutput {
    algorithm: DigestAlgorithm,
    bytes: Box<[u8]>,
}

impl DigestOutput {
    pub(crate) fn new(algorithm: DigestAlgorithm, bytes: Box<[u8]>) -> Self {
        Self { algorithm, bytes }
    }

    /// Parses a hex digest produced by `algorithm`.
    ///
    /// Returns `None` if the string is not valid hex or has the wrong length.
    pub fn from_hex(algorithm: DigestAlgorithm, hex_str: &str) -> Option<Self> {
        let bytes = hex::decode(hex_str).ok()?;
        if bytes.len() != algorithm.output_len() {
            return None;
        }
        Some(Self::new(algorithm, bytes.into_boxed_slice()))
    }

    /// The algorithm that produced this digest.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Standard base64 with padding.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// URL-safe base64 without padding.
    pub fn to_base64_url(&self) -> String {
        URL_SAFE_NO_PAD.encode(&self.bytes)
    }

    /// Renders the digest in `encoding`.
    pub fn encode(&self, encoding: Encoding) -> String {
        match encoding {
            Encoding::Hex => self.to_hex(),
            Encoding::Base64 => self.to_base64(),
            Encoding::Base64Url => self.to_base64_url(),
        }
    }
}

impl AsRef<[u8]> for DigestOutput {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for DigestOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
