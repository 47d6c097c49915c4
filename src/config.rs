/*!
 * Configuration handling for git-flatten
 */

use std::path::{Path, PathBuf};

use clap::Parser;
use strum::Display;

use crate::error::Result;
use crate::git::{BlobLinker, GitCommand, DEFAULT_BRANCH};

/// Style of headers in the output document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputStyle {
    /// Rule lines around a `FILE: <path>` label
    #[default]
    Plain,
    /// Level-2 heading with the path as inline code
    Markdown,
}

/// Command-line arguments for git-flatten
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "git-flatten",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flatten a Git repo into a single text or Markdown file.",
    long_about = "Concatenates every file tracked by Git into one document. Binary files are replaced by a placeholder line, optionally linking to the file on a hosted copy of the repository."
)]
pub struct Args {
    /// Path to local Git repository.
    pub repo_path: PathBuf,

    /// Output text or Markdown file path.
    pub output_path: PathBuf,

    /// Base URL for binary file links (optional).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Output as Markdown with headers.
    #[clap(long)]
    pub markdown: bool,

    /// Branch used in binary file links
    #[clap(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Print a summary table after writing
    #[clap(long)]
    pub summary: bool,

    /// Enable debug logging on stderr
    #[clap(short, long)]
    pub verbose: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Repository to flatten
    pub repo_path: PathBuf,

    /// Output document path
    pub output_path: PathBuf,

    /// Base URL for binary file links
    pub base_url: Option<String>,

    /// Branch used in binary file links
    pub branch: String,

    /// Header and placeholder style
    pub style: OutputStyle,

    /// Git executable used for listing
    pub git: GitCommand,

    /// Print a summary table after writing
    pub summary: bool,
}

impl Config {
    /// Configuration with defaults for everything but the two paths
    pub fn new(repo_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            output_path: output_path.into(),
            base_url: None,
            branch: DEFAULT_BRANCH.to_string(),
            style: OutputStyle::Plain,
            git: GitCommand::default(),
            summary: false,
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            repo_path: args.repo_path,
            output_path: args.output_path,
            base_url: args.base_url,
            branch: args.branch,
            style: if args.markdown {
                OutputStyle::Markdown
            } else {
                OutputStyle::Plain
            },
            git: GitCommand::default(),
            summary: args.summary,
        }
    }

    /// Link builder for binary placeholders, if a base URL is configured
    pub fn blob_linker(&self) -> Option<BlobLinker> {
        self.base_url
            .as_deref()
            .filter(|base| !base.is_empty())
            .map(|base| BlobLinker::new(base, &self.branch))
    }

    /// Validate the configuration
    ///
    /// The repository itself is not checked here: a bad repository path is
    /// reported by git and leads to an empty listing.
    pub fn validate(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            crate::ensure!(
                parent == Path::new("") || parent.is_dir(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        crate::ensure!(
            !self.output_path.is_dir(),
            Config,
            "Output path is a directory: {}",
            self.output_path.display()
        );

        Ok(())
    }
}
