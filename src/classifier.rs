/*!
 * Text/binary classification of tracked files
 *
 * The check is a heuristic. A NUL byte in the first [`BINARY_SNIFF_LEN`] bytes
 * is the primary signal; after that the media type guessed from the file name
 * decides. Files with an unknown or missing extension and no NUL byte are
 * treated as text even if they hold other non-UTF-8 bytes.
 */

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::types::FileKind;

/// Number of leading bytes inspected for NUL bytes
pub const BINARY_SNIFF_LEN: usize = 512;

/// Classify the file at `path`
///
/// Any failure to read the file classifies it as binary, so undecodable or
/// inaccessible content is never embedded.
pub fn classify(path: &Path) -> FileKind {
    let prefix = match read_prefix(path, BINARY_SNIFF_LEN) {
        Ok(prefix) => prefix,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "unreadable file treated as binary");
            return FileKind::Binary;
        }
    };

    if is_binary_content(&prefix) {
        return FileKind::Binary;
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if is_non_text_media(&name) {
        return FileKind::Binary;
    }

    FileKind::Text
}

/// Whether the file at `path` should be treated as binary
pub fn is_binary_file(path: &Path) -> bool {
    classify(path) == FileKind::Binary
}

/// Whether `prefix` contains a NUL byte within the sniffed length
pub fn is_binary_content(prefix: &[u8]) -> bool {
    let check_len = prefix.len().min(BINARY_SNIFF_LEN);
    prefix[..check_len].contains(&0)
}

/// Whether the media type guessed from `file_name` is known and not `text/*`
pub fn is_non_text_media(file_name: &str) -> bool {
    match mime_guess::from_path(file_name).first() {
        Some(mime) => mime.type_() != mime_guess::mime::TEXT,
        None => false,
    }
}

/// Read at most `limit` bytes from the start of the file
fn read_prefix(path: &Path, limit: usize) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buffer = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}
