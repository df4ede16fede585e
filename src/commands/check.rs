use std::io::Write;

use anyhow::Result;

use asset_stager::presentation::output::{render_check_json, render_check_text};
use asset_stager::presentation::{create_check_use_case, resolve_stage_options};

use super::{report_config_warnings, CommandContext};

pub fn cmd_check(ctx: &CommandContext, strict: bool) -> Result<()> {
    let (options, warnings) = resolve_stage_options(&ctx.root, &ctx.overrides)?;
    report_config_warnings(ctx, "check", &warnings);

    let report = create_check_use_case().execute(&options, strict)?;

    let mut out = std::io::stdout().lock();
    if ctx.json {
        render_check_json(&mut out, &report)?;
    } else {
        render_check_text(&mut out, &report, ctx.style, &ctx.root)?;
    }
    out.flush()?;

    if !report.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}
