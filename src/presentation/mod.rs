//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (status lines / NDJSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases and resolves options (dependency injection)
//! - `output` - Console event sink and report rendering
//! - `terminal` / `theme` - Capability detection and design tokens

pub mod cli;
pub mod factory;
pub mod output;
pub mod terminal;
pub mod theme;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_check_use_case, create_stage_use_case, resolve_stage_options, PathOverrides};
pub use output::{ConsoleEventSink, OutputStyle};
