//! Error types for asset-stager
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for stager operations
pub type StagerResult<T> = Result<T, StagerError>;

/// Main error type for stager operations
///
/// A missing source library is not an error: it is reported as an
/// [`AssetOutcome`](crate::application::stage::AssetOutcome). Everything here
/// is fatal to the whole run.
#[derive(Error, Debug)]
pub enum StagerError {
    /// A destination directory could not be created
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A library could not be copied into place
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: FsError,
    },

    /// A file could not be hashed during `check`
    #[error("failed to hash {path}: {source}")]
    Hash {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Invalid or unreadable configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Asset entry whose source path has no file name
    #[error("asset '{name}' has no file name in source path {source_path}")]
    InvalidAsset { name: String, source_path: PathBuf },
}

impl StagerError {
    /// Short machine-readable code used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            StagerError::CreateDir { .. } => "create_dir_failed",
            StagerError::Copy { .. } => "copy_failed",
            StagerError::Hash { .. } => "hash_failed",
            StagerError::InvalidConfig { .. } => "invalid_config",
            StagerError::InvalidAsset { .. } => "invalid_asset",
        }
    }
}
