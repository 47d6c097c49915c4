/*!
 * Git repository handling functionality
 */

mod error;
mod tracked;
mod url;

// Re-export public items
pub use error::{GitError, GitResult};
pub use tracked::{list_tracked_files, try_list_tracked_files, GitCommand, DEFAULT_GIT_PROGRAM};
pub use url::{BlobLinker, DEFAULT_BRANCH};
