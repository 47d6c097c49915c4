/*!
 * git-flatten - Flatten a Git repository into a single document
 *
 * This library concatenates every file tracked by Git into one plain-text or
 * Markdown document, replacing binary files with a placeholder line.
 */

pub mod classifier;
pub mod config;
pub mod error;
pub mod flattener;
pub mod git;
pub mod report;
pub mod types;
pub mod writer;

#[cfg(test)]
mod tests;

// Re-export main components for easier access
pub use classifier::{classify, is_binary_file, BINARY_SNIFF_LEN};
pub use config::{Args, Config, OutputStyle};
pub use error::{FlattenError, Result};
pub use flattener::{flatten_repo, FlattenStatistics, Flattener};
pub use git::{list_tracked_files, BlobLinker, GitCommand};
pub use report::{ReportFormat, Reporter};
pub use types::{FileKind, RecordOutcome, TrackedPath};
pub use writer::{parse_plain_document, DocumentWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
