//! Recognized source file extensions
//!
//! Only files carrying one of these suffixes are bundled. Matching is
//! case-insensitive.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

/// Extensions whose files are included in the bundle
static RECOGNIZED: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["php", "js", "html", "css", "sql"].into_iter().collect());

/// Check whether a path carries a recognized extension
pub fn is_recognized(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| RECOGNIZED.contains(ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Comma-separated list of recognized extensions for banner output
pub fn recognized_list() -> String {
    let mut exts: Vec<String> = RECOGNIZED.iter().map(|e| format!(".{}", e)).collect();
    exts.sort();
    exts.join(", ")
}
