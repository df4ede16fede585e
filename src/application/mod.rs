//! Application Layer
//!
//! Use cases that orchestrate the staging flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `StageUseCase` - Ensures directories and copies vendored libraries
//! - `CheckUseCase` - Compares staged copies against their sources

pub mod check;
pub mod stage;

pub use check::{AssetCheck, AssetCheckStatus, CheckReport, CheckUseCase};
pub use stage::{AssetOutcome, AssetStatus, DirectoryOutcome, StageOptions, StageResult, StageUseCase};
