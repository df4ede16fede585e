//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::ContentHash;

/// Local file system implementation
///
/// Copies go through a temp file in the destination directory and are
/// renamed into place, so readers never observe a partially written library.
/// The staged file takes the source's permissions, not the temp file's 0600.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(e, path))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<u64> {
        let dir = match to.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut reader = File::open(from).map_err(|e| FsError::from_io(e, from))?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(e, dir))?;

        let bytes = io::copy(&mut reader, &mut tmp).map_err(|e| FsError::from_io(e, to))?;
        tmp.flush().map_err(|e| FsError::from_io(e, to))?;

        let permissions = reader
            .metadata()
            .map_err(|e| FsError::from_io(e, from))?
            .permissions();
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| FsError::from_io(e, to))?;

        tmp.persist(to)
            .map_err(|e| FsError::from_io(e.error, to))?;

        Ok(bytes)
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        let mut file = File::open(path).map_err(|e| FsError::from_io(e, path))?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher).map_err(|e| FsError::from_io(e, path))?;
        Ok(ContentHash::from_hasher(hasher))
    }
}
