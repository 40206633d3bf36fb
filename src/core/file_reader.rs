//! Best-effort text reading
//!
//! Bundled files are decoded as UTF-8 with invalid sequences replaced, so a
//! stray binary byte never aborts a run.

use std::fs;
use std::io;
use std::path::Path;

/// Read a file as text, replacing invalid UTF-8 sequences.
///
/// I/O errors are returned to the caller; decoding itself never fails.
pub fn read_text_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => Ok(String::from_utf8_lossy(e.as_bytes()).into_owned()),
    }
}
