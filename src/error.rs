//! Error handling for the ingestify application.
//! Defines the boundary error type; the pattern compiler and matcher never fail.

use std::io;
use thiserror::Error;

/// Custom error types for ingestify operations.
///
/// Only the loader, walker, writer and CLI produce these; matching itself is total.
#[derive(Error, Debug)]
pub enum IngestifyError {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Represents errors reported while walking the input directory
    #[error("Walk error: {0}")]
    WalkError(String),

    /// Represents errors in the settings file or resolved settings
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The output artifact would grow past its byte budget
    #[error("Output file size exceeded the limit of {limit} bytes")]
    OutputLimitExceeded { limit: u64 },
}

impl From<walkdir::Error> for IngestifyError {
    fn from(err: walkdir::Error) -> Self {
        IngestifyError::WalkError(err.to_string())
    }
}

/// Convenience type alias for Results with IngestifyError as the error type.
pub type IngestifyResult<T> = Result<T, IngestifyError>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The IngestifyError to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: IngestifyError) {
    eprintln!("{}", err);
    std::process::exit(1);
}
