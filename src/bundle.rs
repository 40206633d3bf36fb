//! Bundling backend
//!
//! Walks a directory tree with walkdir and concatenates every recognized
//! file into a single annotated output file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::extensions::is_recognized;
use crate::core::file_reader::read_text_lossy;

/// Separator line written between bundled files
pub const SEPARATOR: &str = "==================================================";

/// Fatal bundling errors.
///
/// Per-file read failures are recovered inline and never surface through
/// this type; only output-stream failures abort a run.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("cannot create output file '{}': {source}", path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("cannot write to output file '{}': {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

/// Statistics from a bundling run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleStats {
    /// Number of blocks written (one per matched file)
    pub files: usize,

    /// Matched files whose content could not be read
    pub errors: usize,

    /// Total bytes written to the output file
    pub bytes: u64,
}

/// Write a chunk to the output stream, accounting for written bytes
fn emit(
    out: &mut impl Write,
    output: &Path,
    stats: &mut BundleStats,
    text: &str,
) -> Result<(), BundleError> {
    out.write_all(text.as_bytes())
        .map_err(|source| BundleError::WriteOutput {
            path: output.to_path_buf(),
            source,
        })?;
    stats.bytes += text.len() as u64;
    Ok(())
}

/// Bundle every recognized file under `root` into `output`.
///
/// Visits entries depth-first, sorted by file name per directory level so
/// output order is deterministic. For each matched file one block is
/// written: the bare filename, a blank line, the file content (lossy UTF-8
/// decoded), and a separator. A file that cannot be read gets a placeholder
/// line in place of its content and the walk continues.
///
/// The filename header is written before the read is attempted, so a
/// placeholder block still carries its header.
pub fn bundle_files(root: &Path, output: &Path, quiet: bool) -> Result<BundleStats, BundleError> {
    let file = File::create(output).map_err(|source| BundleError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    let mut stats = BundleStats::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if !is_recognized(path) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        emit(&mut out, output, &mut stats, &format!("{}\n\n", name))?;

        match read_text_lossy(path) {
            Ok(content) => {
                emit(&mut out, output, &mut stats, &content)?;
                emit(
                    &mut out,
                    output,
                    &mut stats,
                    &format!("\n\n{}\n\n", SEPARATOR),
                )?;
                if !quiet {
                    println!("Processed: {}", path.display());
                }
            }
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                emit(
                    &mut out,
                    output,
                    &mut stats,
                    &format!("[Error reading file: {}]\n\n", e),
                )?;
                emit(&mut out, output, &mut stats, &format!("{}\n\n", SEPARATOR))?;
                stats.errors += 1;
            }
        }

        stats.files += 1;
    }

    out.flush().map_err(|source| BundleError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(stats)
}
