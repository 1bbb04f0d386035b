//! ingestify concatenates a directory tree into a single file.
//! Its core is a gitignore-style pattern matcher that decides, for every
//! walked entry, whether it is excluded.

/// Command-line interface module for the ingestify application
pub mod cli;

/// Settings file loading and merging with command-line arguments
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the ingestify application
pub mod error;

/// Ignore file loading
pub mod ignore;

pub mod logger;

/// Path matching against compiled ignore patterns
pub mod matcher;

/// Path normalization helpers
pub mod path;

/// Compilation of ignore-file lines into patterns
pub mod pattern;

/// Concatenation of walked files into the output artifact
pub mod processor;

/// Directory traversal pruned by the ignore list
pub mod walk;

pub use matcher::{is_ignored, IgnoreList};
pub use pattern::{compile, Pattern};
