use std::io;

use ingestify::error::IngestifyError;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: IngestifyError = io_err.into();

    match err {
        IngestifyError::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = IngestifyError::ConfigError("invalid settings".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid settings");

    let err = IngestifyError::OutputLimitExceeded { limit: 2048 };
    assert_eq!(
        err.to_string(),
        "Output file size exceeded the limit of 2048 bytes"
    );
}
