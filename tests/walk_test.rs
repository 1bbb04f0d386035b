use ingestify::walk::{directory_size, Visit, Walker};
use ingestify::IgnoreList;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "src/main.c", "int main() {}");
    write(root, "src/util.c", "void util() {}");
    write(root, "logs/debug.log", "debug");
    write(root, "logs/keep.txt", "keep");
    write(root, "notes.log", "notes");
    write(root, "README.md", "readme");
    temp_dir
}

fn split(visits: &[Visit]) -> (Vec<&str>, Vec<&str>) {
    let mut files = Vec::new();
    let mut ignored = Vec::new();
    for visit in visits {
        match visit {
            Visit::File { relative, .. } => files.push(relative.as_str()),
            Visit::Ignored { relative, .. } => ignored.push(relative.as_str()),
        }
    }
    (files, ignored)
}

#[test_log::test]
fn test_walk_without_patterns() {
    let temp_dir = fixture();
    let ignore = IgnoreList::default();
    let visits: Vec<Visit> = Walker::new(temp_dir.path(), &ignore)
        .collect::<Result<_, _>>()
        .unwrap();

    let (files, ignored) = split(&visits);
    assert_eq!(
        files,
        [
            "README.md",
            "logs/debug.log",
            "logs/keep.txt",
            "notes.log",
            "src/main.c",
            "src/util.c"
        ]
    );
    assert!(ignored.is_empty());

    let last = visits.last().unwrap();
    assert_eq!(last.relative(), "src/util.c");
    assert_eq!(last.path(), temp_dir.path().join("src").join("util.c"));
}

#[test_log::test]
fn test_ignored_directory_is_pruned() {
    let temp_dir = fixture();
    // the negation cannot resurrect a file below a pruned directory
    let ignore = IgnoreList::parse("logs/\n!logs/keep.txt\n*.log");
    let visits: Vec<Visit> = Walker::new(temp_dir.path(), &ignore)
        .collect::<Result<_, _>>()
        .unwrap();

    let (files, ignored) = split(&visits);
    assert_eq!(files, ["README.md", "src/main.c", "src/util.c"]);
    assert_eq!(ignored, ["logs", "notes.log"]);
}

#[test_log::test]
fn test_directory_only_pattern_spares_files() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "build", "a file named build");
    write(temp_dir.path(), "sub/build/out.o", "object");

    let ignore = IgnoreList::parse("build/");
    let visits: Vec<Visit> = Walker::new(temp_dir.path(), &ignore)
        .collect::<Result<_, _>>()
        .unwrap();

    let (files, ignored) = split(&visits);
    assert_eq!(files, ["build"]);
    assert_eq!(ignored, ["sub/build"]);
}

#[test_log::test]
fn test_skipped_output_file() {
    let temp_dir = fixture();
    let output = temp_dir.path().join("out.txt");
    fs::write(&output, "").unwrap();

    let ignore = IgnoreList::parse("src\nlogs\n*.log");
    let visits: Vec<Visit> = Walker::new(temp_dir.path(), &ignore)
        .skip(&output)
        .collect::<Result<_, _>>()
        .unwrap();

    let (files, ignored) = split(&visits);
    assert_eq!(files, ["README.md"]);
    assert!(ignored.contains(&"out.txt"));
    assert_eq!(
        visits.last().map(Visit::path),
        Some(temp_dir.path().join("src").as_path())
    );
}

#[test]
fn test_directory_size() {
    let temp_dir = fixture();
    let expected: u64 = ["int main() {}", "void util() {}", "debug", "keep", "notes", "readme"]
        .iter()
        .map(|s| s.len() as u64)
        .sum();
    assert_eq!(directory_size(temp_dir.path()).unwrap(), expected);
}

#[test]
fn test_directory_size_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    assert!(directory_size(temp_dir.path().join("missing")).is_err());
}
