//! Asset entity - one vendored library to stage
//!
//! An asset entry is a `(source, destination, name)` triple. The source is
//! relative to the dependencies directory (`node_modules/`), the destination
//! is a directory relative to the static root (`static/`). The staged file
//! keeps the source's file name.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// A library copied from the dependency tree into the static assets tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetEntry {
    /// Display name used in status lines ("Plotly")
    name: String,
    /// Path relative to the dependencies directory
    source: PathBuf,
    /// Directory relative to the static root
    destination: PathBuf,
}

impl AssetEntry {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// File name the staged copy is written under
    pub fn file_name(&self) -> Option<&OsStr> {
        self.source.file_name()
    }

    /// Absolute (or root-relative) source path under `deps_dir`
    pub fn source_in(&self, deps_dir: &Path) -> PathBuf {
        deps_dir.join(&self.source)
    }

    /// Destination directory under `static_dir`
    pub fn destination_dir_in(&self, static_dir: &Path) -> PathBuf {
        static_dir.join(&self.destination)
    }

    /// Full path of the staged copy under `static_dir`
    ///
    /// Returns `None` when the source path has no file name (e.g. `..`).
    pub fn destination_file_in(&self, static_dir: &Path) -> Option<PathBuf> {
        self.file_name()
            .map(|name| self.destination_dir_in(static_dir).join(name))
    }
}

/// The three libraries the front end loads, in staging order:
/// charting library, CSS framework runtime, icon set.
pub fn default_manifest() -> Vec<AssetEntry> {
    vec![
        AssetEntry::new("Plotly", "plotly.js/dist/plotly.js", "js"),
        AssetEntry::new("Tailwind CSS", "tailwindcss/dist/tailwind.min.js", "js"),
        AssetEntry::new("Lucide", "lucide/dist/umd/lucide.js", "js"),
    ]
}

/// Directories under the static root that always exist after a run
pub fn default_directories() -> Vec<PathBuf> {
    vec![PathBuf::from("js"), PathBuf::from("css")]
}
