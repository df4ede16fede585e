//! Check Use Case
//!
//! Compares every staged library against its source without writing anything.
//! Used in CI to catch a `static/js` tree that drifted from `node_modules`.

use std::path::PathBuf;

use tracing::debug;

use crate::application::stage::StageOptions;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ContentHash;
use crate::error::{StagerError, StagerResult};

/// Status of one staged library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetCheckStatus {
    /// Staged copy matches the source
    Current { hash: ContentHash },
    /// Staged copy differs from the source
    Stale {
        source_hash: ContentHash,
        staged_hash: ContentHash,
    },
    /// Source present, never staged
    NotStaged,
    /// Source absent or not a regular file
    SourceMissing,
}

impl AssetCheckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssetCheckStatus::Current { .. } => "current",
            AssetCheckStatus::Stale { .. } => "stale",
            AssetCheckStatus::NotStaged => "not_staged",
            AssetCheckStatus::SourceMissing => "source_missing",
        }
    }
}

/// Result of checking a single asset entry
#[derive(Debug, Clone)]
pub struct AssetCheck {
    pub name: String,
    pub source: PathBuf,
    pub staged: PathBuf,
    pub status: AssetCheckStatus,
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub items: Vec<AssetCheck>,
    /// Whether a missing source counts as drift
    pub strict: bool,
}

impl CheckReport {
    pub fn current(&self) -> usize {
        self.count(|s| matches!(s, AssetCheckStatus::Current { .. }))
    }

    pub fn stale(&self) -> usize {
        self.count(|s| matches!(s, AssetCheckStatus::Stale { .. }))
    }

    pub fn not_staged(&self) -> usize {
        self.count(|s| *s == AssetCheckStatus::NotStaged)
    }

    pub fn source_missing(&self) -> usize {
        self.count(|s| *s == AssetCheckStatus::SourceMissing)
    }

    /// No stale or unstaged libraries (and, when strict, no missing sources)
    pub fn is_clean(&self) -> bool {
        self.stale() == 0 && self.not_staged() == 0 && (!self.strict || self.source_missing() == 0)
    }

    fn count(&self, pred: impl Fn(&AssetCheckStatus) -> bool) -> usize {
        self.items.iter().filter(|i| pred(&i.status)).count()
    }
}

/// Check Use Case
pub struct CheckUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> CheckUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    /// Hash every source and staged copy named by `options`
    pub fn execute(&self, options: &StageOptions, strict: bool) -> StagerResult<CheckReport> {
        let mut report = CheckReport {
            items: Vec::with_capacity(options.assets.len()),
            strict,
        };

        for asset in &options.assets {
            let source = asset.source_in(&options.deps_dir);
            let staged = asset.destination_file_in(&options.static_dir).ok_or_else(|| {
                StagerError::InvalidAsset {
                    name: asset.name().to_string(),
                    source_path: asset.source().to_path_buf(),
                }
            })?;

            let status = if !self.file_system.is_file(&source) {
                AssetCheckStatus::SourceMissing
            } else if !self.file_system.is_file(&staged) {
                AssetCheckStatus::NotStaged
            } else {
                let source_hash = self.hash(&source)?;
                let staged_hash = self.hash(&staged)?;
                if source_hash == staged_hash {
                    AssetCheckStatus::Current { hash: source_hash }
                } else {
                    AssetCheckStatus::Stale {
                        source_hash,
                        staged_hash,
                    }
                }
            };
            debug!(asset = asset.name(), status = status.label(), "checked");

            report.items.push(AssetCheck {
                name: asset.name().to_string(),
                source,
                staged,
                status,
            });
        }

        Ok(report)
    }

    fn hash(&self, path: &std::path::Path) -> StagerResult<ContentHash> {
        self.file_system
            .hash(path)
            .map_err(|source| StagerError::Hash {
                path: path.to_path_buf(),
                source,
            })
    }
}
