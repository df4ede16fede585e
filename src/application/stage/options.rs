//! Stage Options
//!
//! Configuration types for stage runs.

use std::path::{Path, PathBuf};

use crate::config::StagerConfig;
use crate::domain::entities::{default_directories, default_manifest, AssetEntry};

/// Options for the stage use case
#[derive(Debug, Clone)]
pub struct StageOptions {
    /// Installed dependencies directory (`node_modules`)
    pub deps_dir: PathBuf,
    /// Static assets root (`static`)
    pub static_dir: PathBuf,
    /// Directories under `static_dir` that always exist after a run
    pub directories: Vec<PathBuf>,
    /// Libraries to stage, in order
    pub assets: Vec<AssetEntry>,
    /// Dry run (don't create directories or copy files)
    pub dry_run: bool,
}

impl StageOptions {
    /// Built-in manifest rooted at `root` (`root/node_modules` -> `root/static`)
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            deps_dir: root.join("node_modules"),
            static_dir: root.join("static"),
            directories: default_directories(),
            assets: default_manifest(),
            dry_run: false,
        }
    }

    /// Options resolved from configuration, with relative paths joined to `root`
    pub fn from_config(root: impl AsRef<Path>, config: &StagerConfig) -> Self {
        let root = root.as_ref();
        Self {
            deps_dir: root.join(&config.deps_dir),
            static_dir: root.join(&config.static_dir),
            directories: config.directories.clone(),
            assets: config.effective_assets(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Every directory the run ensures, in order: the configured ones first,
    /// then any asset destination not already listed.
    pub fn directories_to_ensure(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = Vec::new();
        let candidates = self
            .directories
            .iter()
            .map(PathBuf::as_path)
            .chain(self.assets.iter().map(AssetEntry::destination));

        for dir in candidates {
            let full = self.static_dir.join(dir);
            if !dirs.contains(&full) {
                dirs.push(full);
            }
        }
        dirs
    }
}
