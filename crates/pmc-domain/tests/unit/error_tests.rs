//! Unit tests for domain error types

use pmc_domain::Error;
use std::error::Error as _;

#[test]
fn test_file_parse_error() {
    let error = Error::file_parse("lib/foo.rb", 3, 7, "missing `end`");
    match &error {
        Error::FileParse {
            path,
            line,
            column,
            message,
        } => {
            assert_eq!(path, "lib/foo.rb");
            assert_eq!((*line, *column), (3, 7));
            assert_eq!(message, "missing `end`");
        }
        _ => panic!("Expected FileParse error"),
    }
    assert_eq!(
        error.to_string(),
        "Parse error in lib/foo.rb at line 3, column 7: missing `end`"
    );
}

#[test]
fn test_file_access_error() {
    let error = Error::file_access("lib/foo.rb", "binary content");
    match error {
        Error::FileAccess { path, message } => {
            assert_eq!(path, "lib/foo.rb");
            assert_eq!(message, "binary content");
        }
        _ => panic!("Expected FileAccess error"),
    }
}

#[test]
fn test_only_per_file_errors_are_recoverable() {
    assert!(Error::file_parse("a.rb", 1, 1, "x").is_recoverable());
    assert!(Error::file_access("a.rb", "x").is_recoverable());
    assert!(!Error::revision("main", "unknown").is_recoverable());
    assert!(!Error::repository("broken").is_recoverable());
    assert!(!Error::configuration("bad").is_recoverable());
    assert!(!Error::internal("bug").is_recoverable());
}

#[test]
fn test_revision_error_display() {
    let error = Error::revision("feature/x", "reference not found");
    assert_eq!(
        error.to_string(),
        "Cannot resolve revision `feature/x`: reference not found"
    );
}

#[test]
fn test_errors_with_source_keep_it() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error = Error::configuration_with_source("Failed to read pmc.toml", io);

    assert!(error.to_string().contains("pmc.toml"));
    assert!(error.source().is_some());
    assert!(Error::configuration("plain").source().is_none());
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: Error = io.into();

    assert!(matches!(error, Error::Io { .. }));
}
