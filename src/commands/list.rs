use anyhow::Result;

use asset_stager::presentation::output::{render_manifest_json, render_manifest_text};
use asset_stager::presentation::resolve_stage_options;

use super::{report_config_warnings, CommandContext};

pub fn cmd_list(ctx: &CommandContext) -> Result<()> {
    let (options, warnings) = resolve_stage_options(&ctx.root, &ctx.overrides)?;
    report_config_warnings(ctx, "list", &warnings);

    let mut out = std::io::stdout().lock();
    if ctx.json {
        render_manifest_json(&mut out, &options)?;
    } else {
        render_manifest_text(&mut out, &options, ctx.style, &ctx.root)?;
    }

    Ok(())
}
