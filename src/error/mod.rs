//! Error types for filedigest.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while computing a digest.
#[derive(Debug, Error)]
pub enum DigestError {
    /// A path could not be opened, read or sought, or is not a regular file.
    #[error("cannot access {path:?}: {source}")]
    FileAccess {
        /// The path that was being hashed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred while reading from a caller-supplied reader.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The algorithm name is not one of md5, sha1, sha256, sha512.
    #[error("unsupported digest algorithm: {0}")]
    InvalidAlgorithm(String),

    /// Invalid option value.
    #[error("invalid option: {message}")]
    InvalidOption {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl DigestError {
    /// Attaches `path` to a reader-level I/O error, turning it into
    /// [`DigestError::FileAccess`]. Other variants pass through unchanged.
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            DigestError::Io(source) => DigestError::FileAccess {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DigestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: DigestError = io_err.into();
        assert!(matches!(err, DigestError::Io(_)));
    }

    #[test]
    fn test_at_path() {
        let err = DigestError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        match err.at_path(Path::new("/tmp/x.bin")) {
            DigestError::FileAccess { path, source } => {
                assert_eq!(path, PathBuf::from("/tmp/x.bin"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected {other:?}"),
        }

        let err = DigestError::InvalidAlgorithm("crc32".into()).at_path(Path::new("a"));
        assert!(matches!(err, DigestError::InvalidAlgorithm(_)));
    }

    #[test]
    fn test_display() {
        let err = DigestError::InvalidOption {
            message: "block_size must be non-zero",
        };
        assert!(err.to_string().contains("invalid option"));

        let err = DigestError::InvalidAlgorithm("whirlpool".into());
        assert_eq!(err.to_string(), "unsupported digest algorithm: whirlpool");
    }
}
