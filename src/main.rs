//! srcpack - Bundle source files from a directory tree into one text file
//!
//! srcpack provides:
//! - Recursive file discovery with a fixed set of recognized extensions
//! - Best-effort text extraction (lossy UTF-8 decoding)
//! - A single concatenated output file with filename headers and separators

use anyhow::Result;
use clap::Parser;

mod bundle;
mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
