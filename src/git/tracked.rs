/*!
 * Listing of the files Git tracks in a repository
 */

use std::path::Path;
use std::process::Command;

use tracing::debug;

use super::error::{GitError, GitResult};
use crate::types::TrackedPath;

/// Default executable used to query the repository
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Handle on the git executable used for listing
#[derive(Debug, Clone)]
pub struct GitCommand {
    program: String,
}

impl Default for GitCommand {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_PROGRAM)
    }
}

impl GitCommand {
    /// Use a specific executable instead of `git` from `PATH`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `ls-files --exclude-standard` in `repo` and return the listed paths
    pub fn ls_files(&self, repo: &Path) -> GitResult<Vec<TrackedPath>> {
        debug!(program = %self.program, repo = %repo.display(), "listing tracked files");

        let output = Command::new(&self.program)
            .arg("-C")
            .arg(repo)
            .args(["ls-files", "--exclude-standard"])
            .output()
            .map_err(|source| GitError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let paths: Vec<TrackedPath> = stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(TrackedPath::from)
            .collect();

        debug!(count = paths.len(), "git reported tracked files");
        Ok(paths)
    }

    /// Like [`GitCommand::ls_files`], but a failure becomes a console
    /// diagnostic and an empty listing
    pub fn ls_files_or_empty(&self, repo: &Path) -> Vec<TrackedPath> {
        match self.ls_files(repo) {
            Ok(paths) => paths,
            Err(e) => {
                println!("Error running git ls-files: {}", e);
                Vec::new()
            }
        }
    }
}

/// List the files tracked in `repo`, honoring standard ignore rules
pub fn try_list_tracked_files(repo: &Path) -> GitResult<Vec<TrackedPath>> {
    GitCommand::default().ls_files(repo)
}

/// List the files tracked in `repo`; errors are reported and yield nothing
pub fn list_tracked_files(repo: &Path) -> Vec<TrackedPath> {
    GitCommand::default().ls_files_or_empty(repo)
}
