//! Running digest state.

use std::fmt;

use digest::DynDigest;

use super::{DigestAlgorithm, DigestOutput};

/// A streaming digest accumulator.
///
/// Bytes are fed with [`update`](Self::update) in order; [`finalize`](Self::finalize)
/// consumes the accumulator, so a state can only be finalized once.
///
/// # Example
///
/// ```
/// use filedigest::{DigestAccumulator, DigestAlgorithm};
///
/// let mut acc = DigestAccumulator::new(DigestAlgorithm::Md5);
/// acc.update(b"hello ");
/// acc.update(b"world");
/// let digest = acc.finalize();
///
/// assert_eq!(digest, DigestAccumulator::digest(DigestAlgorithm::Md5, b"hello world"));
/// ```
pub struct DigestAccumulator {
    algorithm: DigestAlgorithm,
    state: Box<dyn DynDigest + Send>,
    bytes_hashed: u64,
}

impl DigestAccumulator {
    /// Creates an empty accumulator.
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self {
            algorithm,
            state: algorithm.new_state(),
            bytes_hashed: 0,
        }
    }

    /// Feeds more bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
        self.bytes_hashed += data.len() as u64;
    }

    /// Returns the algorithm.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Total number of bytes fed so far.
    pub fn bytes_hashed(&self) -> u64 {
        self.bytes_hashed
    }

    /// Finalizes and returns the digest.
    pub fn finalize(self) -> DigestOutput {
        DigestOutput::new(self.algorithm, self.state.finalize())
    }

    /// Hashes `data` in one shot.
    pub fn digest(algorithm: DigestAlgorithm, data: &[u8]) -> DigestOutput {
        let mut acc = Self::new(algorithm);
        acc.update(data);
        acc.finalize()
    }
}

impl fmt::Debug for DigestAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestAccumulator")
            .field("algorithm", &self.algorithm)
            .field("bytes_hashed", &self.bytes_hashed)
            .finish_non_exhaustive()
    }
}
