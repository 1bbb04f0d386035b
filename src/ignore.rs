//! Ignore-list loading for ingestify.
//! Reads an ignore file, one pattern per line, and compiles it into an
//! [`IgnoreList`]. Loading never fails: a file that cannot be read simply
//! yields no patterns.

use crate::constants::IGNORE_FILE;
use crate::matcher::IgnoreList;
use log::{debug, warn};
use std::{
    fs::read_to_string,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Reads and compiles an ignore file.
///
/// # Arguments
/// * `ignore_path` - Path to the ignore file
///
/// # Returns
/// * `IgnoreList` - Compiled patterns in file order
///
/// # Notes
/// - If the file doesn't exist, returns an empty list
/// - If the file is unreadable or not UTF-8, logs a warning and returns an empty list
/// - Each line is a separate pattern; empty lines compile to inert patterns
///
/// # Example
/// ```ignore
/// # Contents of .ingestifyignore:
/// *.log
/// target/
/// !important.log
/// ```
pub fn read_ignore_file<P: AsRef<Path>>(ignore_path: P) -> IgnoreList {
    let ignore_path = ignore_path.as_ref();
    match read_to_string(ignore_path) {
        Ok(contents) => {
            let list = IgnoreList::parse(&contents);
            debug!("Loaded {} pattern(s) from {}", list.len(), ignore_path.display());
            list
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist", ignore_path.display());
            IgnoreList::default()
        }
        Err(e) => {
            warn!("Could not read ignore file {}: {}", ignore_path.display(), e);
            IgnoreList::default()
        }
    }
}

/// Resolves which ignore file applies to `directory`.
///
/// An explicit path wins; otherwise the directory's own ignore file is used
/// when present.
pub fn resolve_ignore_file(explicit: Option<&Path>, directory: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = directory.join(IGNORE_FILE);
    candidate.is_file().then_some(candidate)
}
