/*!
 * Document writer for flattened repositories
 */

use std::io::{self, Write};

use once_cell::sync::Lazy;

use crate::config::OutputStyle;
use crate::git::BlobLinker;

/// Width of the rule lines around plain-mode headers
pub const RULE_WIDTH: usize = 80;

/// Rule line bracketing plain-mode headers
pub static RULE: Lazy<String> = Lazy::new(|| "=".repeat(RULE_WIDTH));

/// Label preceding the path in plain-mode headers
const FILE_LABEL: &str = "FILE: ";

/// Writes file records to the output document
pub struct DocumentWriter<W: Write> {
    /// Destination of the document
    out: W,
    /// Header and placeholder style
    style: OutputStyle,
    /// Link builder for binary placeholders, if a base URL was given
    linker: Option<BlobLinker>,
    /// Bytes written so far
    written: u64,
}

impl<W: Write> DocumentWriter<W> {
    /// Create a writer over `out`
    pub fn new(out: W, style: OutputStyle, linker: Option<BlobLinker>) -> Self {
        Self {
            out,
            style,
            linker,
            written: 0,
        }
    }

    /// Bytes written to the document so far
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Write the section header for `rel_path`
    pub fn write_header(&mut self, rel_path: &str) -> io::Result<()> {
        let header = match self.style {
            OutputStyle::Markdown => format!("\n## `{}`\n\n", rel_path),
            OutputStyle::Plain => {
                format!("\n{rule}\n{FILE_LABEL}{rel_path}\n{rule}\n\n", rule = *RULE)
            }
        };
        self.emit(header.as_bytes())
    }

    /// Write a file's text followed by a newline
    pub fn write_content(&mut self, content: &str) -> io::Result<()> {
        self.emit(content.as_bytes())?;
        self.emit(b"\n")
    }

    /// Write the placeholder line for an omitted binary file
    pub fn write_binary_placeholder(&mut self, rel_path: &str) -> io::Result<()> {
        let line = match &self.linker {
            Some(linker) => format!("[Binary file omitted: {}]\n", linker.blob_url(rel_path)),
            None => format!("[Binary file omitted: {}]\n", rel_path),
        };
        self.emit(line.as_bytes())
    }

    /// Write the placeholder line for a text file that could not be read
    pub fn write_unreadable_placeholder(&mut self, rel_path: &str, reason: &str) -> io::Result<()> {
        let line = format!("[Could not read file: {}. Error: {}]\n", rel_path, reason);
        self.emit(line.as_bytes())
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.written += bytes.len() as u64;
        Ok(())
    }
}

/// Split a plain-style document back into `(path, content)` pairs
///
/// Placeholders come back as content. A record's content runs from the end
/// of its header to the start of the next one, minus the newline the writer
/// appended.
pub fn parse_plain_document(document: &str) -> Vec<(String, String)> {
    let opener = format!("\n{rule}\n{FILE_LABEL}", rule = *RULE);
    let mut records = Vec::new();

    let mut sections = document.split(opener.as_str());
    // Anything before the first header is not part of a record
    sections.next();

    for section in sections {
        let Some((path, rest)) = section.split_once('\n') else {
            continue;
        };
        let Some(body) = rest
            .strip_prefix(RULE.as_str())
            .and_then(|b| b.strip_prefix("\n\n"))
        else {
            continue;
        };
        let content = body.strip_suffix('\n').unwrap_or(body);
        records.push((path.to_string(), content.to_string()));
    }

    records
}
