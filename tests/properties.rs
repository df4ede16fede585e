//! Property tests for asset-stager.
//!
//! Properties use randomized input generation to protect invariants like
//! "staged bytes equal source bytes" and "every asset is copied or missing".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/copy.rs"]
mod copy;

#[path = "properties/manifest.rs"]
mod manifest;
