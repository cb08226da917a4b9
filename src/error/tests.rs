//! Error type tests
//!
//! Tests for FetchError and its conversions.

#![allow(clippy::expect_used)]

use crate::error::FetchError;
use crate::error::cache::{contaminated, marker_creation_failed, metadata_read_failed};
use crate::error::download::failed as download_failed;
use crate::error::fs::{io_error, not_found as file_not_found, read_failed, write_failed};
use crate::error::registry::{parse_failed as registry_parse_failed, unregistered_version};
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = unregistered_version("1.8.9");
    assert_eq!(err.to_string(), "No artifact registered for version 1.8.9");
}

#[test]
fn test_error_code() {
    let err = unregistered_version("1.8.9");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("replaymod_fetch::registry::unregistered_version".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: FetchError = io_err.into();
    assert!(matches!(err, FetchError::IoError { .. }));
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("invalid: yaml: content: [unclosed");
    let err: FetchError = parse_result.unwrap_err().into();
    assert!(matches!(err, FetchError::RegistryParseFailed { .. }));
}

test_error_contains!(
    test_download_failed,
    download_failed("https://cdn.example/x.jar", "connection refused"),
    "Failed to download",
    "https://cdn.example/x.jar",
    "connection refused"
);

test_error_contains!(
    test_registry_parse_failed,
    registry_parse_failed("missing remote id"),
    "Failed to parse artifact registry"
);

test_error_contains!(
    test_metadata_read_failed,
    metadata_read_failed("/mods/replaymod/a.jar", "invalid Zip archive"),
    "Failed to read mod metadata",
    "/mods/replaymod/a.jar"
);

test_error_contains!(
    test_directory_contaminated,
    contaminated("/mods/replaymod", 3),
    "contains 3 jar files"
);

test_error_contains!(
    test_marker_creation_failed,
    marker_creation_failed("/mods/replaymod/marker", "read-only file system"),
    "Failed to create marker file"
);

test_error_contains!(
    test_no_mod_directory,
    FetchError::NoModDirectory,
    "Could not find mod directory"
);

#[test]
fn test_file_errors() {
    assert!(matches!(
        file_not_found("/tmp/missing.jar"),
        FetchError::FileNotFound { .. }
    ));
    assert!(read_failed("/a", "denied").to_string().contains("Failed to read file"));
    assert!(write_failed("/a", "disk full").to_string().contains("Failed to write file"));
    assert!(io_error("boom").to_string().contains("IO error"));
}
