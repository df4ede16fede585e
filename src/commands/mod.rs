//! Command handlers
//!
//! Each handler resolves options, runs one use case, and renders the result
//! as status lines or NDJSON.

mod check;
mod list;
mod stage;

use std::path::PathBuf;

use asset_stager::config::ConfigWarning;
use asset_stager::presentation::{OutputStyle, PathOverrides};

pub use check::cmd_check;
pub use list::cmd_list;
pub use stage::cmd_stage;

/// Global flags shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub root: PathBuf,
    pub overrides: PathOverrides,
    pub json: bool,
    pub style: OutputStyle,
}

/// Unknown config keys go to stderr in text mode; JSON consumers get them as events.
fn report_config_warnings(ctx: &CommandContext, command: &str, warnings: &[ConfigWarning]) {
    for warning in warnings {
        if ctx.json {
            println!(
                "{}",
                serde_json::json!({
                    "event": "warning",
                    "command": command,
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                })
            );
        } else {
            eprintln!("warning: {}", warning);
        }
    }
}
