//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the stage and check use cases to touch the disk
//! without depending on a concrete implementation (local disk, test doubles).

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(PathBuf, std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error, keeping the path it happened on
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "{}: {}", path.display(), err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(_, err) => Some(err),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic copies
/// - test doubles inside `#[cfg(test)]` modules
pub trait FileSystem {
    /// True only for a regular file (symlinks are followed)
    fn is_file(&self, path: &Path) -> bool;

    /// True for a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and parents; succeeds if it already exists
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy `from` to `to` byte-for-byte, replacing any existing file.
    /// Returns the number of bytes written.
    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<u64>;

    /// Compute content hash (SHA-256)
    fn hash(&self, path: &Path) -> FsResult<ContentHash>;
}
