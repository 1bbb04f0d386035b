//! Directory traversal that consults the ignore list before descending into
//! or emitting each entry.

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::IngestifyResult;
use crate::matcher::IgnoreList;
use crate::path::relative_slash_path;

/// Outcome for a single walked entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    /// Entry excluded by the ignore list (or the output artifact itself).
    /// Nothing below an ignored directory is visited.
    Ignored { path: PathBuf, relative: String },
    /// Regular file to ingest
    File { path: PathBuf, relative: String },
}

impl Visit {
    pub fn path(&self) -> &Path {
        match self {
            Visit::Ignored { path, .. } | Visit::File { path, .. } => path,
        }
    }

    pub fn relative(&self) -> &str {
        match self {
            Visit::Ignored { relative, .. } | Visit::File { relative, .. } => relative,
        }
    }
}

/// Iterator over the entries of a directory tree, pruned by an [`IgnoreList`].
///
/// Entries are sorted by file name so the output is deterministic. Directories
/// that are kept are descended without being reported; symlinks and other
/// special files are skipped.
pub struct Walker<'a> {
    root: PathBuf,
    ignore: &'a IgnoreList,
    skip: Option<PathBuf>,
    entries: walkdir::IntoIter,
}

impl<'a> Walker<'a> {
    pub fn new<P: AsRef<Path>>(root: P, ignore: &'a IgnoreList) -> Self {
        let root = root.as_ref().to_path_buf();
        let entries = WalkDir::new(&root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();
        Self {
            root,
            ignore,
            skip: None,
            entries,
        }
    }

    /// Never yields `path` as a file; used for the output artifact when it
    /// lives inside the walked tree.
    pub fn skip<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        self.skip = Some(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()));
        self
    }

    fn is_skipped(&self, path: &Path) -> bool {
        let Some(skip) = &self.skip else {
            return false;
        };
        match path.canonicalize() {
            Ok(canonical) => &canonical == skip,
            Err(_) => path == skip,
        }
    }
}

impl Iterator for Walker<'_> {
    type Item = IngestifyResult<Visit>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };

            let path = entry.path().to_path_buf();
            let Some(relative) = relative_slash_path(&self.root, &path) else {
                continue;
            };
            let file_type = entry.file_type();
            let is_dir = file_type.is_dir();

            let decided = self.ignore.deciding_pattern(&relative, Some(is_dir));
            if let Some(pattern) = decided.filter(|p| !p.is_negated()) {
                debug!("'{}' matched ignore pattern '{}'", relative, pattern.raw());
                if is_dir {
                    self.entries.skip_current_dir();
                }
                return Some(Ok(Visit::Ignored { path, relative }));
            }

            if is_dir {
                continue;
            }

            if !file_type.is_file() {
                debug!("Skipping special file '{}'", relative);
                continue;
            }

            if self.is_skipped(&path) {
                return Some(Ok(Visit::Ignored { path, relative }));
            }

            return Some(Ok(Visit::File { path, relative }));
        }
    }
}

/// Sums the sizes of all regular files below `root`.
///
/// # Errors
/// * `IngestifyError::WalkError` if `root` or any directory below it cannot be read
pub fn directory_size<P: AsRef<Path>>(root: P) -> IngestifyResult<u64> {
    let mut total = 0;
    for entry in WalkDir::new(root.as_ref()) {
        let entry = entry?;
        if entry.file_type().is_file() {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}
