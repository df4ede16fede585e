//! Output Rendering
//!
//! Status lines for stage runs, plus text and JSON rendering for `check`
//! and `list`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::application::{AssetCheckStatus, CheckReport, StageOptions};
use crate::domain::ports::{StageEvent, StageEventSink};

use super::terminal::TerminalCapabilities;
use super::theme::Icon;

/// How text output is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    pub color: bool,
    pub unicode: bool,
}

impl OutputStyle {
    /// No color, ASCII icons
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }
}

impl From<TerminalCapabilities> for OutputStyle {
    fn from(caps: TerminalCapabilities) -> Self {
        Self {
            color: caps.supports_color,
            unicode: caps.supports_unicode,
        }
    }
}

/// Path relative to `root` when possible, for shorter status lines
fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Event sink that prints one status line per directory and asset
pub struct ConsoleEventSink {
    style: OutputStyle,
    root: PathBuf,
    dry_run: AtomicBool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(style: OutputStyle, root: impl Into<PathBuf>) -> Self {
        Self::with_writer(style, root, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(
        style: OutputStyle,
        root: impl Into<PathBuf>,
        writer: W,
    ) -> Self {
        Self {
            style,
            root: root.into(),
            dry_run: AtomicBool::new(false),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn format_event(&self, event: &StageEvent) -> Option<String> {
        let style = &self.style;
        let dry_run = self.dry_run.load(Ordering::Relaxed);

        match event {
            StageEvent::Started { dry_run: true, .. } => {
                Some("Dry run: nothing will be written".to_string())
            }
            StageEvent::Started { .. } => None,
            StageEvent::DirectoryReady { path, created } => {
                let path = display_path(&self.root, path);
                if dry_run && *created {
                    Some(format!("{} Would create directory: {}", style.icon(Icon::Pending), path))
                } else {
                    Some(format!("{} Directory ready: {}", style.icon(Icon::Success), path))
                }
            }
            StageEvent::AssetCopied {
                name, destination, ..
            } => Some(format!(
                "{} Copied {} {} {}",
                style.icon(Icon::Success),
                name,
                style.icon(Icon::Arrow),
                display_path(&self.root, destination)
            )),
            StageEvent::AssetPlanned {
                name, destination, ..
            } => Some(format!(
                "{} Would copy {} {} {}",
                style.icon(Icon::Pending),
                name,
                style.icon(Icon::Arrow),
                display_path(&self.root, destination)
            )),
            StageEvent::AssetMissing { name, source, .. } => Some(format!(
                "{} {} not found at {}",
                style.icon(Icon::Error),
                name,
                display_path(&self.root, source)
            )),
            StageEvent::Completed {
                copied,
                planned,
                missing,
            } => {
                if dry_run {
                    Some(format!(
                        "Dry run complete: {} to copy, {} missing",
                        planned, missing
                    ))
                } else {
                    Some(format!(
                        "Asset staging complete: {} copied, {} missing",
                        copied, missing
                    ))
                }
            }
        }
    }
}

impl StageEventSink for ConsoleEventSink {
    fn on_event(&self, event: StageEvent) {
        if let StageEvent::Started { dry_run, .. } = &event {
            self.dry_run.store(*dry_run, Ordering::Relaxed);
        }
        if let Some(line) = self.format_event(&event) {
            if let Ok(mut writer) = self.writer.lock() {
                let _ = writeln!(writer, "{}", line);
                let _ = writer.flush();
            }
        }
    }
}

/// Text rendering of a check report
pub fn render_check_text(
    out: &mut dyn Write,
    report: &CheckReport,
    style: OutputStyle,
    root: &Path,
) -> io::Result<()> {
    for item in &report.items {
        let staged = display_path(root, &item.staged);
        let source = display_path(root, &item.source);
        match &item.status {
            AssetCheckStatus::Current { hash } => writeln!(
                out,
                "{} {} is current ({})",
                style.icon(Icon::Success),
                item.name,
                hash.short()
            )?,
            AssetCheckStatus::Stale {
                source_hash,
                staged_hash,
            } => writeln!(
                out,
                "{} {} is stale: {} ({}) differs from {} ({})",
                style.icon(Icon::Error),
                item.name,
                staged,
                staged_hash.short(),
                source,
                source_hash.short()
            )?,
            AssetCheckStatus::NotStaged => writeln!(
                out,
                "{} {} is not staged: {} is missing",
                style.icon(Icon::Error),
                item.name,
                staged
            )?,
            AssetCheckStatus::SourceMissing => {
                let icon = if report.strict {
                    Icon::Error
                } else {
                    Icon::Warning
                };
                writeln!(
                    out,
                    "{} {} source not found at {}",
                    style.icon(icon),
                    item.name,
                    source
                )?
            }
        }
    }

    writeln!(
        out,
        "Check: {} current, {} stale, {} not staged, {} source missing",
        report.current(),
        report.stale(),
        report.not_staged(),
        report.source_missing()
    )
}

/// NDJSON rendering of a check report
pub fn render_check_json(out: &mut dyn Write, report: &CheckReport) -> io::Result<()> {
    for (index, item) in report.items.iter().enumerate() {
        let mut event = serde_json::json!({
            "event": "asset_status",
            "command": "check",
            "index": index,
            "name": item.name,
            "source": item.source.display().to_string(),
            "staged": item.staged.display().to_string(),
            "status": item.status.label(),
        });
        match &item.status {
            AssetCheckStatus::Current { hash } => {
                event["hash"] = serde_json::json!(hash.as_str());
            }
            AssetCheckStatus::Stale {
                source_hash,
                staged_hash,
            } => {
                event["source_hash"] = serde_json::json!(source_hash.as_str());
                event["staged_hash"] = serde_json::json!(staged_hash.as_str());
            }
            AssetCheckStatus::NotStaged | AssetCheckStatus::SourceMissing => {}
        }
        writeln!(out, "{}", event)?;
    }

    let complete = serde_json::json!({
        "event": "complete",
        "command": "check",
        "success": report.is_clean(),
        "strict": report.strict,
        "current": report.current(),
        "stale": report.stale(),
        "not_staged": report.not_staged(),
        "source_missing": report.source_missing(),
    });
    writeln!(out, "{}", complete)
}

/// Text rendering of the effective manifest
pub fn render_manifest_text(
    out: &mut dyn Write,
    options: &StageOptions,
    style: OutputStyle,
    root: &Path,
) -> io::Result<()> {
    for asset in &options.assets {
        let destination = asset
            .destination_file_in(&options.static_dir)
            .unwrap_or_else(|| asset.destination_dir_in(&options.static_dir));
        writeln!(
            out,
            "{}: {} {} {}",
            asset.name(),
            display_path(root, &asset.source_in(&options.deps_dir)),
            style.icon(Icon::Arrow),
            display_path(root, &destination)
        )?;
    }
    for dir in options.directories_to_ensure() {
        writeln!(out, "directory: {}", display_path(root, &dir))?;
    }
    Ok(())
}

/// NDJSON rendering of the effective manifest
pub fn render_manifest_json(out: &mut dyn Write, options: &StageOptions) -> io::Result<()> {
    for (index, asset) in options.assets.iter().enumerate() {
        let event = serde_json::json!({
            "event": "asset",
            "command": "list",
            "index": index,
            "name": asset.name(),
            "source": asset.source_in(&options.deps_dir).display().to_string(),
            "destination": asset.destination_dir_in(&options.static_dir).display().to_string(),
        });
        writeln!(out, "{}", event)?;
    }
    let dirs: Vec<String> = options
        .directories_to_ensure()
        .iter()
        .map(|d| d.display().to_string())
        .collect();
    let complete = serde_json::json!({
        "event": "complete",
        "command": "list",
        "asset_count": options.assets.len(),
        "directories": dirs,
    });
    writeln!(out, "{}", complete)
}
