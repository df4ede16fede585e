//! Event Sink Implementations
//!
//! Provides concrete implementations of StageEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable sink lives in `presentation::output`.

mod json;

pub use json::{stage_event_json, JsonEventSink};
