//! Download transport
//!
//! The reconciler only needs one capability from the network: fetch a URL into
//! a file. [`Transport`] abstracts it so tests can count downloads without a
//! server; [`HttpTransport`] is the blocking `reqwest` implementation.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{self, Result};
use crate::progress::DownloadProgress;

/// Default request timeout (2 minutes)
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Fetches a remote file to a local path
pub trait Transport {
    /// Download `url` to `dest`, returning the number of bytes written.
    ///
    /// Implementations must not leave a file at `dest` when they fail.
    fn download(&self, url: &str, dest: &Path) -> Result<u64>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        (**self).download(url, dest)
    }
}

/// HTTP transport on a blocking `reqwest` client
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
    show_progress: bool,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("timeout", &self.timeout)
            .field("show_progress", &self.show_progress)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport with the default timeout and no progress display
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a transport with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("replaymod-fetch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| error::fs::io_error(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout,
            show_progress: false,
        })
    }

    /// Draw a progress bar on stderr while downloading
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn copy_body(
        &self,
        response: &mut reqwest::blocking::Response,
        file: &mut File,
        dest: &Path,
    ) -> io::Result<u64> {
        if !self.show_progress {
            return io::copy(response, file);
        }

        let file_name = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let progress = DownloadProgress::new(&file_name, response.content_length());
        let mut writer = progress.wrap_write(file);
        match io::copy(response, &mut writer).and_then(|n| writer.flush().map(|()| n)) {
            Ok(n) => {
                progress.finish();
                Ok(n)
            }
            Err(e) => {
                progress.abandon();
                Err(e)
            }
        }
    }
}

impl Transport for HttpTransport {
    fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        debug!(url, dest = %dest.display(), "Starting download");

        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| error::download::failed(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error::download::failed(url, format!("HTTP {status}")));
        }

        // Stage next to the destination so the final rename stays on one file system.
        // The staging name never ends in the package extension.
        let staging_dir = dest.parent().unwrap_or_else(|| Path::new("."));
        let mut staged = NamedTempFile::with_prefix_in(".download-", staging_dir)
            .map_err(|e| error::fs::write_failed(staging_dir.display().to_string(), e.to_string()))?;

        let bytes = self
            .copy_body(&mut response, staged.as_file_mut(), dest)
            .map_err(|e| error::download::failed(url, e.to_string()))?;

        staged
            .persist(dest)
            .map_err(|e| error::fs::write_failed(dest.display().to_string(), e.to_string()))?;

        debug!(url, bytes, "Download finished");
        Ok(bytes)
    }
}
