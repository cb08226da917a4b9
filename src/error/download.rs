//! Download errors

use super::FetchError;

/// Creates a download failed error
pub fn failed(url: impl Into<String>, reason: impl Into<String>) -> FetchError {
    FetchError::DownloadFailed {
        url: url.into(),
        reason: reason.into(),
    }
}
