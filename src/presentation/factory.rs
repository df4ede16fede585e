//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up,
//! and resolves CLI flags plus configuration into `StageOptions`.

use std::path::{Path, PathBuf};

use crate::application::{CheckUseCase, StageOptions, StageUseCase};
use crate::config::{ConfigWarning, StagerConfig};
use crate::error::StagerResult;
use crate::infrastructure::LocalFs;

/// Type alias for the concrete StageUseCase
pub type ConcreteStageUseCase = StageUseCase<LocalFs>;

/// Type alias for the concrete CheckUseCase
pub type ConcreteCheckUseCase = CheckUseCase<LocalFs>;

/// Create a stage use case backed by the local disk
pub fn create_stage_use_case() -> ConcreteStageUseCase {
    StageUseCase::new(LocalFs::new())
}

/// Create a check use case backed by the local disk
pub fn create_check_use_case() -> ConcreteCheckUseCase {
    CheckUseCase::new(LocalFs::new())
}

/// Path overrides given on the command line
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub config: Option<PathBuf>,
    pub deps_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

/// Resolve config (file, env) and CLI overrides into stage options for `root`
pub fn resolve_stage_options(
    root: &Path,
    overrides: &PathOverrides,
) -> StagerResult<(StageOptions, Vec<ConfigWarning>)> {
    let (mut config, warnings) = StagerConfig::resolve(root, overrides.config.as_deref())?;

    if let Some(dir) = &overrides.deps_dir {
        config.deps_dir = dir.clone();
    }
    if let Some(dir) = &overrides.static_dir {
        config.static_dir = dir.clone();
    }

    Ok((StageOptions::from_config(root, &config), warnings))
}
