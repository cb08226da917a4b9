//! Managed directory errors
//!
//! Apart from [`no_mod_directory`], these are never returned to callers of the
//! reconciler. They are built so the recovery path can log a uniform message.

use super::FetchError;

/// Creates a metadata read failed error
pub fn metadata_read_failed(path: impl Into<String>, reason: impl Into<String>) -> FetchError {
    FetchError::MetadataReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory contaminated error
pub fn contaminated(path: impl Into<String>, count: usize) -> FetchError {
    FetchError::DirectoryContaminated {
        path: path.into(),
        count,
    }
}

/// Creates a marker creation failed error
pub fn marker_creation_failed(path: impl Into<String>, reason: impl Into<String>) -> FetchError {
    FetchError::MarkerCreationFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a no mod directory error
pub fn no_mod_directory() -> FetchError {
    FetchError::NoModDirectory
}
