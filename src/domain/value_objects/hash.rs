//! Content hash of a library file (`sha256:<hex>`).
//!
//! `check` compares the hash of a source with that of its staged copy.

use std::fmt;

use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    pub const PREFIX: &'static str = "sha256:";

    /// Hash an in-memory buffer
    pub fn from_bytes(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        Self::from_hasher(hasher)
    }

    /// Finish a hasher that was fed incrementally (e.g. through `io::copy`)
    pub fn from_hasher(hasher: Sha256) -> Self {
        Self(format!("{}{:x}", Self::PREFIX, hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn hex(&self) -> &str {
        &self.0[Self::PREFIX.len()..]
    }

    /// First 12 hex digits, for status lines
    pub fn short(&self) -> &str {
        let hex = self.hex();
        &hex[..hex.len().min(12)]
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
