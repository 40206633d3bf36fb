//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::bundle;
use crate::core::extensions;

/// Output filename used when the interactive answer is blank
const DEFAULT_OUTPUT: &str = "extracted_files.txt";

/// srcpack - bundle recognized source files under a directory into one text file.
#[derive(Parser, Debug)]
#[command(name = "srcpack")]
#[command(
    author,
    version,
    about,
    long_about = r#"srcpack walks a directory tree, collects every file with a recognized
extension (.php, .js, .html, .css, .sql; case-insensitive), and concatenates
their contents into a single annotated text file.

Each bundled file becomes one block:
- the bare filename, then a blank line
- the file content (invalid UTF-8 is replaced, never fatal)
- a 50-character '=' separator

A file that cannot be read gets a placeholder block and the walk continues.
Missing arguments are prompted for interactively.

Examples:
    srcpack ./webapp bundle.txt
    srcpack ./webapp              # prompts for the output name
    srcpack                       # prompts for both
"#
)]
pub struct Cli {
    /// Root directory to search.
    #[arg(
        value_name = "ROOT",
        long_help = "Root directory to search recursively.\n\n\
If omitted, the path is prompted for on standard input."
    )]
    pub root: Option<PathBuf>,

    /// Output file path (created or truncated).
    #[arg(
        value_name = "OUTPUT",
        long_help = "Path of the output text file. An existing file is truncated;\n\
parent directories are not created.\n\n\
If omitted, the path is prompted for on standard input, and a blank\n\
answer falls back to 'extracted_files.txt'."
    )]
    pub output: Option<PathBuf>,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        long_help = "Suppress the banner and per-file progress lines. Errors and the\n\
final status are still printed."
    )]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,
}

/// Prompt on stdout and read one trimmed line from stdin
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let root = match cli.root {
        Some(path) => path,
        None => PathBuf::from(prompt("Enter the directory path to search: ")?),
    };

    let output = match cli.output {
        Some(path) => path,
        None => {
            let answer = prompt(&format!(
                "Enter output file name (default: {}): ",
                DEFAULT_OUTPUT
            ))?;
            if answer.is_empty() {
                PathBuf::from(DEFAULT_OUTPUT)
            } else {
                PathBuf::from(answer)
            }
        }
    };

    if !root.is_dir() {
        eprintln!("Error: Directory '{}' does not exist.", root.display());
        return Ok(());
    }

    if !cli.quiet {
        println!("Searching directory: {}", root.display());
        println!("Output file: {}", output.display());
        println!("Target extensions: {}", extensions::recognized_list());
        println!("{}", "-".repeat(40));
    }

    match bundle::bundle_files(&root, &output, cli.quiet) {
        Ok(stats) => {
            println!();
            println!("{}", "Extraction completed successfully!".green());
            println!("Results saved to: {}", output.display());
            if stats.errors > 0 {
                println!(
                    "Bundled {} files ({} unreadable), {} bytes written",
                    stats.files, stats.errors, stats.bytes
                );
            } else {
                println!(
                    "Bundled {} files, {} bytes written",
                    stats.files, stats.bytes
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            println!();
            println!("{}", "Extraction failed.".red());
        }
    }

    Ok(())
}
