//! Common constants used throughout the ingestify application.

/// Ignore file looked up in the input directory when none is given
pub const IGNORE_FILE: &str = ".ingestifyignore";

/// Default output cap, as a multiple of the input directory size
pub const DEFAULT_SIZE_MULTIPLIER: u64 = 2;

/// Rule appended to every file header in the output artifact
pub const HEADER_RULE: &str = "=============================================================";
