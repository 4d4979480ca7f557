//! Filesystem existence probe consulted during searches.

use std::io;
use std::path::Path;

/// Existence-check collaborator abstracting the filesystem.
///
/// Implementations report whether `path` names a regular file. The resolver
/// treats probe errors as "no match at this level", so an unreadable
/// directory never aborts a walk.
pub trait FileProbe: Send + Sync {
    /// Returns whether `path` exists as a regular file.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when existence cannot be determined, for
    /// example because a directory along the way cannot be accessed.
    fn is_file(&self, path: &Path) -> io::Result<bool>;
}

/// Probe backed by [`std::fs`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileProbe;

impl FileProbe for OsFileProbe {
    fn is_file(&self, path: &Path) -> io::Result<bool> {
        match std::fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(err) if matches!(
                err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
            {
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}
