//! Stage Event Port
//!
//! Provides an observable interface for stage runs.
//! Console status lines and the JSON event stream are both sinks of these events.

use std::path::PathBuf;

/// Event emitted during a stage run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent {
    /// Run started
    Started {
        deps_dir: PathBuf,
        static_dir: PathBuf,
        asset_count: usize,
        dry_run: bool,
    },

    /// A destination directory exists (or would, in a dry run)
    DirectoryReady { path: PathBuf, created: bool },

    /// Library copied into place
    AssetCopied {
        index: usize,
        name: String,
        destination: PathBuf,
        bytes: u64,
    },

    /// Library would be copied (dry run)
    AssetPlanned {
        index: usize,
        name: String,
        destination: PathBuf,
    },

    /// Source library not found; nothing was written
    AssetMissing {
        index: usize,
        name: String,
        source: PathBuf,
    },

    /// Run completed
    Completed {
        copied: usize,
        planned: usize,
        missing: usize,
    },
}

/// Trait for receiving stage events
///
/// Implementations:
/// - ConsoleEventSink: one status line per event
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait StageEventSink: Send + Sync {
    /// Handle a stage event
    fn on_event(&self, event: StageEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl StageEventSink for NoopEventSink {
    fn on_event(&self, _event: StageEvent) {}
}

/// Test event sink that records all events
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingEventSink {
    events: std::sync::Mutex<Vec<StageEvent>>,
}

#[cfg(test)]
impl RecordingEventSink {
    pub(crate) fn events(&self) -> Vec<StageEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl StageEventSink for RecordingEventSink {
    fn on_event(&self, event: StageEvent) {
        self.events.lock().unwrap().push(event);
    }
}
