//! Domain Entities
//!
//! - `AssetEntry` - one vendored library to stage

mod asset;

pub use asset::{default_directories, default_manifest, AssetEntry};
