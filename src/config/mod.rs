//! Configuration module for asset-stager
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSET_STAGER_*)
//! 3. Project config (stager.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigWarning, ENV_DEPS_DIR, ENV_STATIC_DIR};
pub use types::StagerConfig;
