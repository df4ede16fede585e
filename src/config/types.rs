//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::{default_directories, default_manifest, AssetEntry};
use crate::error::StagerResult;

use super::loader::{self, ConfigWarning};

/// Project configuration (`stager.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StagerConfig {
    /// Installed dependencies directory, relative to the project root
    #[serde(default = "default_deps_dir")]
    pub deps_dir: PathBuf,

    /// Static assets root, relative to the project root
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Directories under `static_dir` that always exist after a run
    #[serde(default = "default_directories")]
    pub directories: Vec<PathBuf>,

    /// Replaces the built-in manifest when non-empty
    #[serde(default)]
    pub assets: Vec<AssetEntry>,
}

fn default_deps_dir() -> PathBuf {
    PathBuf::from("node_modules")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for StagerConfig {
    fn default() -> Self {
        Self {
            deps_dir: default_deps_dir(),
            static_dir: default_static_dir(),
            directories: default_directories(),
            assets: Vec::new(),
        }
    }
}

impl StagerConfig {
    /// File name looked up in the project root
    pub const FILE_NAME: &'static str = "stager.toml";

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StagerResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> StagerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve configuration for `root`: explicit file, else `root/stager.toml`
    /// when present, else defaults. Environment overrides apply last.
    pub fn resolve(
        root: &Path,
        explicit: Option<&Path>,
    ) -> StagerResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(root, explicit)
    }

    /// The manifest a run stages: configured assets, or the built-in three
    pub fn effective_assets(&self) -> Vec<AssetEntry> {
        if self.assets.is_empty() {
            default_manifest()
        } else {
            self.assets.clone()
        }
    }
}
