//! Stage Result
//!
//! Result types for stage runs.

use std::path::PathBuf;

/// What happened to one asset entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    /// Copied byte-for-byte into place
    Copied { destination: PathBuf, bytes: u64 },
    /// Would be copied (dry run)
    Planned { destination: PathBuf },
    /// Source absent or not a regular file; nothing written
    Missing,
}

/// Per-asset outcome, in manifest order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetOutcome {
    pub name: String,
    pub source: PathBuf,
    pub status: AssetStatus,
}

impl AssetOutcome {
    pub fn is_missing(&self) -> bool {
        self.status == AssetStatus::Missing
    }
}

/// A directory the run ensured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOutcome {
    pub path: PathBuf,
    /// False when it already existed
    pub created: bool,
}

/// Result of a stage run
#[derive(Debug, Clone, Default)]
pub struct StageResult {
    pub directories: Vec<DirectoryOutcome>,
    pub outcomes: Vec<AssetOutcome>,
}

impl StageResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copied_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, AssetStatus::Copied { .. }))
            .count()
    }

    pub fn planned_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, AssetStatus::Planned { .. }))
            .count()
    }

    pub fn missing_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_missing()).count()
    }

    /// True when every asset was found
    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }
}
