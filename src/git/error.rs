/*!
 * Error types for Git operations
 */

use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while asking Git about a repository
#[derive(Error, Debug)]
pub enum GitError {
    /// The git executable could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// Executable that was invoked
        program: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// Git ran but exited unsuccessfully
    #[error("{stderr}")]
    CommandFailed {
        /// Exit status reported by the process
        status: ExitStatus,
        /// Diagnostic text git printed on stderr
        stderr: String,
    },
}

/// Specialized Result type for Git operations
pub type GitResult<T> = Result<T, GitError>;
