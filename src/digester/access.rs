//! Path checks performed before a file is opened.

use std::fs::Metadata;
use std::io;
use std::path::Path;

use crate::error::{DigestError, Result};

/// Checks that `path` exists and is not a directory.
///
/// Runs before any read so that a missing or unsuitable path fails with a
/// [`DigestError::FileAccess`] naming it.
///
/// # Example
///
/// ```
/// use filedigest::check_access;
///
/// assert!(check_access("/definitely/not/here").is_err());
/// ```
pub fn check_access(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path).map_err(|e| DigestError::Io(e).at_path(path))?;
    ensure_file(path, &metadata)
}

/// Async variant of [`check_access`].
#[cfg(feature = "tokio")]
pub(crate) async fn check_access_async(path: &Path) -> Result<()> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| DigestError::Io(e).at_path(path))?;
    ensure_file(path, &metadata)
}

fn ensure_file(path: &Path, metadata: &Metadata) -> Result<()> {
    if metadata.is_dir() {
        return Err(DigestError::FileAccess {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
        });
    }
    Ok(())
}
