//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --root, ...) are inherited by all subcommands
//! - Running without a subcommand stages the manifest

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// asset-stager - copy vendored front-end libraries into the static assets tree
#[derive(Parser, Debug)]
#[command(name = "asset-stager")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'asset-stager' without arguments to stage the default libraries.")]
pub struct Cli {
    /// Emit NDJSON events instead of status lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root that relative paths resolve against
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Config file (defaults to <root>/stager.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Installed dependencies directory (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub deps_dir: Option<PathBuf>,

    /// Static assets directory (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Copy the vendored libraries into the static directory (default)
    Stage {
        /// Show what would be done without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Report staged libraries that are missing or differ from their source
    Check {
        /// Also fail when a source library is missing
        #[arg(long)]
        strict: bool,
    },

    /// Print the effective manifest
    List,
}

impl Cli {
    /// The subcommand to run, defaulting to a plain stage
    pub fn command_or_default(&self) -> Commands {
        match &self.command {
            Some(Commands::Stage { dry_run }) => Commands::Stage { dry_run: *dry_run },
            Some(Commands::Check { strict }) => Commands::Check { strict: *strict },
            Some(Commands::List) => Commands::List,
            None => Commands::Stage { dry_run: false },
        }
    }
}
