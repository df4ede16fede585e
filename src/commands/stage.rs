use std::sync::Arc;

use anyhow::Result;

use asset_stager::domain::ports::StageEventSink;
use asset_stager::infrastructure::JsonEventSink;
use asset_stager::presentation::{create_stage_use_case, resolve_stage_options, ConsoleEventSink};

use super::{report_config_warnings, CommandContext};

pub fn cmd_stage(ctx: &CommandContext, dry_run: bool) -> Result<()> {
    let (options, warnings) = resolve_stage_options(&ctx.root, &ctx.overrides)?;
    report_config_warnings(ctx, "stage", &warnings);

    let sink: Arc<dyn StageEventSink> = if ctx.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(ctx.style, ctx.root.clone()))
    };

    let options = options.with_dry_run(dry_run);
    create_stage_use_case().execute_with_events(&options, sink)?;

    Ok(())
}
