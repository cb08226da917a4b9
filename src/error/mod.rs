//! Error types and handling for replaymod-fetch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`registry`]: Artifact registry errors
//! - [`download`]: Transport errors
//! - [`cache`]: Managed directory errors (most of them are recovered from)
//! - [`fs`]: File system errors

pub mod cache;
pub mod download;
pub mod fs;
pub mod registry;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fetch operations
#[derive(Error, Diagnostic, Debug)]
pub enum FetchError {
    // Registry errors
    #[error("No artifact registered for version {version}")]
    #[diagnostic(
        code(replaymod_fetch::registry::unregistered_version),
        help("Run 'replaymod-fetch versions' to list supported game versions")
    )]
    UnregisteredVersion { version: String },

    #[error("Failed to parse artifact registry: {reason}")]
    #[diagnostic(code(replaymod_fetch::registry::parse_failed))]
    RegistryParseFailed { reason: String },

    // Download errors
    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(
        code(replaymod_fetch::download::failed),
        help("Check your network connection; the download is not retried automatically")
    )]
    DownloadFailed { url: String, reason: String },

    // Cache errors
    #[error("Failed to read mod metadata of {path}: {reason}")]
    #[diagnostic(code(replaymod_fetch::cache::metadata_read_failed))]
    MetadataReadFailed { path: String, reason: String },

    #[error("Managed directory {path} contains {count} jar files")]
    #[diagnostic(
        code(replaymod_fetch::cache::contaminated),
        help("Do not place other files in the managed directory")
    )]
    DirectoryContaminated { path: String, count: usize },

    #[error("Failed to create marker file {path}: {reason}")]
    #[diagnostic(code(replaymod_fetch::cache::marker_failed))]
    MarkerCreationFailed { path: String, reason: String },

    #[error("Could not find mod directory")]
    #[diagnostic(
        code(replaymod_fetch::cache::no_mod_directory),
        help("The mod loader did not report any mod directory")
    )]
    NoModDirectory,

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(replaymod_fetch::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(replaymod_fetch::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(replaymod_fetch::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(replaymod_fetch::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for FetchError {
    fn from(err: serde_yaml::Error) -> Self {
        FetchError::RegistryParseFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FetchError>;
