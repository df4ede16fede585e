//! asset-stager - stages vendored front-end libraries
//!
//! Copies the charting library, the CSS framework runtime and the icon set
//! from an installed dependency tree (`node_modules/`) into the static
//! assets tree (`static/js/`) served by the web front end.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckReport, CheckUseCase, StageOptions, StageResult, StageUseCase};
pub use config::StagerConfig;
pub use domain::entities::{default_manifest, AssetEntry};
pub use error::{StagerError, StagerResult};
pub use infrastructure::LocalFs;
