//! Artifact registry errors

use super::FetchError;

/// Creates an unregistered version error
pub fn unregistered_version(version: impl Into<String>) -> FetchError {
    FetchError::UnregisteredVersion {
        version: version.into(),
    }
}

/// Creates a registry parse failed error
pub fn parse_failed(reason: impl Into<String>) -> FetchError {
    FetchError::RegistryParseFailed {
        reason: reason.into(),
    }
}
