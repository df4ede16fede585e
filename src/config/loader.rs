//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StagerError, StagerResult};

use super::types::StagerConfig;

/// Environment variable overriding `deps_dir`
pub const ENV_DEPS_DIR: &str = "ASSET_STAGER_DEPS_DIR";
/// Environment variable overriding `static_dir`
pub const ENV_STATIC_DIR: &str = "ASSET_STAGER_STATIC_DIR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StagerResult<(StagerConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| StagerError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: StagerConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StagerError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit file, else `root/stager.toml` when present, else defaults;
/// then environment overrides.
pub fn resolve(
    root: &Path,
    explicit: Option<&Path>,
) -> StagerResult<(StagerConfig, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) if path.is_absolute() => Some(path.to_path_buf()),
        Some(path) => Some(root.join(path)),
        None => Some(root.join(StagerConfig::FILE_NAME)).filter(|p| p.is_file()),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (StagerConfig::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (ASSET_STAGER_* prefix)
pub fn with_env_overrides(config: StagerConfig) -> StagerConfig {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

fn with_overrides_from(
    mut config: StagerConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> StagerConfig {
    if let Some(dir) = get_env(ENV_DEPS_DIR).filter(|v| !v.is_empty()) {
        config.deps_dir = PathBuf::from(dir);
    }
    if let Some(dir) = get_env(ENV_STATIC_DIR).filter(|v| !v.is_empty()) {
        config.static_dir = PathBuf::from(dir);
    }
    config
}

/// Line of `key = ...`; a key that only appears inside another key doesn't count.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deps_dir",
        "static_dir",
        "directories",
        "assets",
        "name",
        "source",
        "destination",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
