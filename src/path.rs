//! Path normalization shared by the walker and the CLI.

use std::path::{Component, Path};

/// Removes one leading `./` and one trailing `/`.
///
/// # Example
/// ```
/// use ingestify::path::sanitize_path;
///
/// assert_eq!(sanitize_path("./src/"), "src");
/// assert_eq!(sanitize_path("src/lib.rs"), "src/lib.rs");
/// ```
pub fn sanitize_path(path: &str) -> &str {
    let path = path.strip_prefix("./").unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}

/// Builds the `/`-separated path of `path` relative to `root`.
///
/// # Returns
/// * `Option<String>` - `None` if `path` is not below `root`, or is `root` itself
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Text after the last `.` of the final segment.
pub fn file_extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.rfind('.').map(|dot| &name[dot + 1..])
}
