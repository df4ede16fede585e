//! Domain Layer
//!
//! Pure staging vocabulary without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Asset entries and the built-in manifest
//! - `value_objects/` - Immutable value types (ContentHash)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, StageEventSink)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
