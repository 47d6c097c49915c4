/*!
 * Core types and data structures for git-flatten
 */

use std::fmt;

/// A path relative to the repository root, exactly as git listed it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackedPath(String);

impl TrackedPath {
    /// The path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TrackedPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for TrackedPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl AsRef<str> for TrackedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a file's content is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Embedded verbatim
    Text,
    /// Replaced by a placeholder
    Binary,
}

/// What was written for a single tracked path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Header and file content
    Text {
        /// Bytes of content embedded
        bytes: usize,
    },
    /// Header and binary placeholder
    Binary,
    /// Header and a could-not-read placeholder
    Unreadable,
    /// Not a regular file; nothing written
    Skipped,
}
