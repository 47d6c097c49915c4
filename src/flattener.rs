/*!
 * Flattening of a repository's tracked files into one document
 */

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use indicatif::ProgressBar;
use tracing::{debug, warn};

use crate::classifier;
use crate::config::Config;
use crate::error::{FlattenError, Result};
use crate::types::{FileKind, RecordOutcome, TrackedPath};
use crate::writer::DocumentWriter;

/// Flattener statistics
#[derive(Debug, Clone, Default)]
pub struct FlattenStatistics {
    /// Paths returned by the listing
    pub files_listed: usize,
    /// Records with embedded text
    pub text_files: usize,
    /// Bytes of file content embedded in text records
    pub text_bytes: u64,
    /// Records with a binary placeholder
    pub binary_files: usize,
    /// Records with a could-not-read placeholder
    pub unreadable_files: usize,
    /// Listed paths that were not regular files
    pub skipped_files: usize,
    /// Size of the output document
    pub bytes_written: u64,
    /// Time spent listing and writing
    pub duration: Duration,
}

impl FlattenStatistics {
    /// Number of records written to the document
    pub fn records_written(&self) -> usize {
        self.text_files + self.binary_files + self.unreadable_files
    }

    fn record(&mut self, outcome: &RecordOutcome) {
        match outcome {
            RecordOutcome::Text { bytes } => {
                self.text_files += 1;
                self.text_bytes += *bytes as u64;
            }
            RecordOutcome::Binary => self.binary_files += 1,
            RecordOutcome::Unreadable => self.unreadable_files += 1,
            RecordOutcome::Skipped => self.skipped_files += 1,
        }
    }
}

/// Turns a repository into a single document
pub struct Flattener {
    /// Flattener configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Flattener statistics
    statistics: FlattenStatistics,
}

impl Flattener {
    /// Create a new flattener
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            progress,
            statistics: FlattenStatistics::default(),
        }
    }

    /// Get flattener statistics
    pub fn get_statistics(&self) -> FlattenStatistics {
        self.statistics.clone()
    }

    /// List the repository's tracked files and write the document
    ///
    /// Returns `Ok(false)` when git reported no files; the output file is
    /// not created in that case.
    pub fn flatten(&mut self) -> Result<bool> {
        let start = Instant::now();
        let paths = self.config.git.ls_files_or_empty(&self.config.repo_path);
        let written = self.flatten_paths(&paths)?;
        self.statistics.duration = start.elapsed();
        Ok(written)
    }

    /// Write the document for an already obtained listing
    pub fn flatten_paths(&mut self, paths: &[TrackedPath]) -> Result<bool> {
        self.statistics.files_listed = paths.len();

        if paths.is_empty() {
            println!("No tracked files found.");
            return Ok(false);
        }

        let linker = self.config.blob_linker();
        let file = File::create(&self.config.output_path)?;
        let mut writer = DocumentWriter::new(BufWriter::new(file), self.config.style, linker);

        self.progress.set_length(paths.len() as u64);
        debug!(
            count = paths.len(),
            style = %self.config.style,
            output = %self.config.output_path.display(),
            "flattening repository"
        );

        for rel_path in paths {
            self.progress.set_message(rel_path.to_string());
            let outcome = self
                .write_record(&mut writer, rel_path)
                .map_err(|e| self.clear_progress(e))?;
            self.statistics.record(&outcome);
            self.progress.inc(1);
        }

        self.statistics.bytes_written = writer.bytes_written();
        writer
            .finish()
            .map_err(|e| self.clear_progress(e.into()))?;
        self.progress.finish_and_clear();

        println!(
            "Flattened repository written to {}",
            self.config.output_path.display()
        );
        Ok(true)
    }

    /// Take the progress display down when the document cannot be written
    fn clear_progress(&self, err: FlattenError) -> FlattenError {
        self.progress.finish_and_clear();
        err
    }

    /// Write the record for one tracked path
    ///
    /// Only output errors propagate; problems with the tracked file become
    /// a skipped entry or a placeholder.
    fn write_record<W: Write>(
        &self,
        writer: &mut DocumentWriter<W>,
        rel_path: &TrackedPath,
    ) -> Result<RecordOutcome> {
        let rel = rel_path.as_str();
        let abs_path = self.config.repo_path.join(rel);

        if !abs_path.is_file() {
            debug!(path = rel, "not a regular file, skipping");
            return Ok(RecordOutcome::Skipped);
        }

        writer.write_header(rel)?;

        if classifier::classify(&abs_path) == FileKind::Binary {
            writer.write_binary_placeholder(rel)?;
            return Ok(RecordOutcome::Binary);
        }

        match fs::read_to_string(&abs_path) {
            Ok(content) => {
                writer.write_content(&content)?;
                Ok(RecordOutcome::Text {
                    bytes: content.len(),
                })
            }
            Err(e) => {
                let reason = e.to_string();
                warn!(path = rel, error = %reason, "could not read text file");
                writer.write_unreadable_placeholder(rel, &reason)?;
                Ok(RecordOutcome::Unreadable)
            }
        }
    }
}

/// Flatten the repository described by `config`, without progress display
pub fn flatten_repo(config: Config) -> Result<FlattenStatistics> {
    let mut flattener = Flattener::new(config, Arc::new(ProgressBar::hidden()));
    flattener.flatten()?;
    Ok(flattener.get_statistics())
}
