//! asset-stager CLI
//!
//! Usage: asset-stager [COMMAND]
//!
//! Commands:
//!   stage   Copy the vendored libraries into the static directory (default)
//!   check   Report staged libraries that drifted from their source
//!   list    Print the effective manifest

mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use asset_stager::presentation::terminal::detect_capabilities;
use asset_stager::presentation::{Cli, Commands, OutputStyle, PathOverrides};
use asset_stager::StagerError;

use commands::CommandContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command_or_default();
    let ctx = CommandContext {
        root: cli.root.clone(),
        overrides: PathOverrides {
            config: cli.config.clone(),
            deps_dir: cli.deps_dir.clone(),
            static_dir: cli.static_dir.clone(),
        },
        json: cli.json,
        style: OutputStyle::from(detect_capabilities().with_color_choice(cli.color)),
    };

    let (name, result) = match command {
        Commands::Stage { dry_run } => ("stage", commands::cmd_stage(&ctx, dry_run)),
        Commands::Check { strict } => ("check", commands::cmd_check(&ctx, strict)),
        Commands::List => ("list", commands::cmd_list(&ctx)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_fatal(name, &err, ctx.json);
            ExitCode::FAILURE
        }
    }
}

/// `-v` info, `-vv` debug, `-vvv` trace; `RUST_LOG` wins when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_fatal(command: &str, err: &anyhow::Error, json: bool) {
    if json {
        let code = err
            .downcast_ref::<StagerError>()
            .map(StagerError::code)
            .unwrap_or("error");
        println!(
            "{}",
            serde_json::json!({
                "event": "error",
                "command": command,
                "code": code,
                "message": format!("{:#}", err),
            })
        );
    } else {
        eprintln!("Error: {:#}", err);
    }
}
