//! Supported digest algorithms.

use digest::DynDigest;
use strum::{Display, EnumIter, EnumString};

use crate::error::DigestError;

/// A digest algorithm.
///
/// Names parse case-insensitively; the hyphenated spellings (`sha-256`)
/// are accepted as well. `Display` renders the canonical lowercase name.
///
/// # Example
///
/// ```
/// use filedigest::DigestAlgorithm;
///
/// let algorithm = DigestAlgorithm::parse("SHA-256")?;
/// assert_eq!(algorithm, DigestAlgorithm::Sha256);
/// assert_eq!(algorithm.to_string(), "sha256");
/// assert_eq!(algorithm.output_len(), 32);
/// # Ok::<(), filedigest::DigestError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum DigestAlgorithm {
    /// MD5 (128-bit).
    #[strum(to_string = "md5")]
    Md5,
    /// SHA-1 (160-bit).
    #[strum(to_string = "sha1", serialize = "sha-1")]
    Sha1,
    /// SHA-256 (256-bit).
    #[strum(to_string = "sha256", serialize = "sha-256")]
    Sha256,
    /// SHA-512 (512-bit).
    #[strum(to_string = "sha512", serialize = "sha-512")]
    Sha512,
}

impl DigestAlgorithm {
    /// Parses an algorithm name.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::InvalidAlgorithm`] carrying the rejected name.
    pub fn parse(name: &str) -> Result<Self, DigestError> {
        name.parse().map_err(|_| DigestError::InvalidAlgorithm(name.to_owned()))
    }

    /// Digest length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha512 => 64,
        }
    }

    /// Creates a fresh hasher state for this algorithm.
    pub(crate) fn new_state(self) -> Box<dyn DynDigest + Send> {
        match self {
            DigestAlgorithm::Md5 => Box::new(md5::Md5::default()),
            DigestAlgorithm::Sha1 => Box::new(sha1::Sha1::default()),
            DigestAlgorithm::Sha256 => Box::new(sha2::Sha256::default()),
            DigestAlgorithm::Sha512 => Box::new(sha2::Sha512::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_names() {
        assert_eq!(DigestAlgorithm::parse("md5").unwrap(), DigestAlgorithm::Md5);
        assert_eq!(DigestAlgorithm::parse("SHA1").unwrap(), DigestAlgorithm::Sha1);
        assert_eq!(DigestAlgorithm::parse("sha-1").unwrap(), DigestAlgorithm::Sha1);
        assert_eq!(DigestAlgorithm::parse("Sha-512").unwrap(), DigestAlgorithm::Sha512);
    }

    #[test]
    fn test_parse_unknown() {
        match DigestAlgorithm::parse("sha3-256") {
            Err(DigestError::InvalidAlgorithm(name)) => assert_eq!(name, "sha3-256"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_display_round_trips() {
        for algorithm in DigestAlgorithm::iter() {
            let name = algorithm.to_string();
            assert_eq!(DigestAlgorithm::parse(&name).unwrap(), algorithm);
        }
    }

    #[test]
    fn test_output_len_matches_state() {
        for algorithm in DigestAlgorithm::iter() {
            assert_eq!(algorithm.new_state().output_size(), algorithm.output_len());
        }
    }
}
