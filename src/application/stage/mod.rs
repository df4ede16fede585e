//! Stage Module
//!
//! The asset stager: ensures the static directories, then copies each
//! vendored library whose source exists.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`StageOptions`)
//! - `result` - Result types (`StageResult`, `AssetOutcome`, `AssetStatus`)
//! - `use_case` - Core use case logic (`StageUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use asset_stager::application::stage::{StageOptions, StageUseCase};
//! use asset_stager::infrastructure::LocalFs;
//!
//! let use_case = StageUseCase::new(LocalFs::new());
//! let result = use_case.execute(&StageOptions::new("."))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::StageOptions;
pub use result::{AssetOutcome, AssetStatus, DirectoryOutcome, StageResult};
pub use use_case::StageUseCase;
