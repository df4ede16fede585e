//! JSON Event Sink
//!
//! Outputs stage events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{StageEvent, StageEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Convert a stage event into its NDJSON object
pub fn stage_event_json(event: &StageEvent) -> serde_json::Value {
    match event {
        StageEvent::Started {
            deps_dir,
            static_dir,
            asset_count,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "command": "stage",
            "version": env!("CARGO_PKG_VERSION"),
            "deps_dir": deps_dir.display().to_string(),
            "static_dir": static_dir.display().to_string(),
            "asset_count": asset_count,
            "dry_run": dry_run,
        }),

        StageEvent::DirectoryReady { path, created } => serde_json::json!({
            "event": "directory_ready",
            "command": "stage",
            "path": path.display().to_string(),
            "created": created,
        }),

        StageEvent::AssetCopied {
            index,
            name,
            destination,
            bytes,
        } => serde_json::json!({
            "event": "asset_copied",
            "command": "stage",
            "index": index,
            "name": name,
            "destination": destination.display().to_string(),
            "bytes": bytes,
        }),

        StageEvent::AssetPlanned {
            index,
            name,
            destination,
        } => serde_json::json!({
            "event": "asset_planned",
            "command": "stage",
            "index": index,
            "name": name,
            "destination": destination.display().to_string(),
        }),

        StageEvent::AssetMissing {
            index,
            name,
            source,
        } => serde_json::json!({
            "event": "asset_missing",
            "command": "stage",
            "index": index,
            "name": name,
            "source": source.display().to_string(),
        }),

        StageEvent::Completed {
            copied,
            planned,
            missing,
        } => serde_json::json!({
            "event": "complete",
            "command": "stage",
            "success": true,
            "copied": copied,
            "planned": planned,
            "missing": missing,
        }),
    }
}

impl StageEventSink for JsonEventSink {
    fn on_event(&self, event: StageEvent) {
        self.write_event(stage_event_json(&event));
    }
}
