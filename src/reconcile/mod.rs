//! Managed directory reconciliation
//!
//! Keeps exactly one valid copy of the registered release in a directory owned
//! by this crate and returns its path.
//!
//! ## Decision tree
//!
//! ```text
//! directory missing        -> create, download
//! no jar                   -> download (other files are left alone)
//! more than one jar        -> delete the directory, recreate, download
//! one jar, valid metadata  -> keep it, no download
//! one jar, anything else   -> delete the jar, download
//! ```
//!
//! The release is resolved before anything on disk is touched, so an
//! unregistered version fails without side effects. Problems with the existing
//! jar are logged and repaired by downloading again; only registry and
//! transport errors reach the caller. Nothing is retried.

pub mod state;


use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::common;
use crate::config::PackageConfig;
use crate::error::{self, Result};
use crate::metadata::{self, Mismatch, Validation};
use crate::registry::{ArtifactDescriptor, ArtifactRegistry};
use crate::transport::Transport;

pub use state::DirectoryState;

/// What a reconciliation did to produce its path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The installed jar was valid and kept
    Reused,
    /// Nothing was installed; the release was downloaded
    Fetched,
    /// An invalid jar was deleted and the release downloaded
    Replaced,
    /// The directory held several jars and was wiped before downloading
    Reset,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Outcome::Reused => "up to date",
            Outcome::Fetched => "downloaded",
            Outcome::Replaced => "replaced",
            Outcome::Reset => "directory reset",
        };
        f.write_str(text)
    }
}

/// Reconciles managed directories against an [`ArtifactRegistry`]
pub struct Reconciler<'a, T: Transport> {
    registry: &'a ArtifactRegistry,
    config: &'a PackageConfig,
    transport: T,
}

impl<'a, T: Transport> Reconciler<'a, T> {
    pub fn new(registry: &'a ArtifactRegistry, config: &'a PackageConfig, transport: T) -> Self {
        Self {
            registry,
            config,
            transport,
        }
    }

    pub fn config(&self) -> &PackageConfig {
        self.config
    }

    /// The subdirectory of `base_dir` owned by this crate: `<base>/<package name>`
    pub fn managed_dir(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.config.name)
    }

    /// Ensure the release for `platform_version` inside the managed subdirectory of `base_dir`
    pub fn ensure_in_base(&self, platform_version: &str, base_dir: &Path) -> Result<PathBuf> {
        self.ensure_artifact(platform_version, &self.managed_dir(base_dir))
    }

    /// Ensure `directory` holds exactly one valid jar for `platform_version` and return its path
    pub fn ensure_artifact(&self, platform_version: &str, directory: &Path) -> Result<PathBuf> {
        self.ensure_artifact_with_outcome(platform_version, directory)
            .map(|(path, _)| path)
    }

    /// Like [`Reconciler::ensure_artifact`], also reporting what was done
    pub fn ensure_artifact_with_outcome(
        &self,
        platform_version: &str,
        directory: &Path,
    ) -> Result<(PathBuf, Outcome)> {
        let descriptor = self.registry.resolve(platform_version)?;

        if !directory.exists() {
            fs::create_dir_all(directory)?;
            let path = self.install(descriptor, directory)?;
            return Ok((path, Outcome::Fetched));
        }

        match DirectoryState::scan(directory, self.config)? {
            DirectoryState::Empty => {
                let path = self.install(descriptor, directory)?;
                Ok((path, Outcome::Fetched))
            }
            DirectoryState::Multiple(candidates) => {
                let err = error::cache::contaminated(
                    directory.display().to_string(),
                    candidates.len(),
                );
                warn!(error = %err, "Resetting managed directory");

                common::fs::reset_dir(directory)?;
                let path = self.install(descriptor, directory)?;
                Ok((path, Outcome::Reset))
            }
            DirectoryState::Single(candidate) => {
                if self.check_candidate(&candidate, descriptor).is_valid() {
                    info!("The installed {} is up to date!", self.config.display_name);
                    return Ok((candidate, Outcome::Reused));
                }

                common::fs::remove_entry(&candidate)?;
                let path = self.install(descriptor, directory)?;
                Ok((path, Outcome::Replaced))
            }
        }
    }

    /// Download the release for `platform_version` into `directory`
    ///
    /// Does not look at what is already in the directory.
    pub fn download_and_install(&self, platform_version: &str, directory: &Path) -> Result<PathBuf> {
        let descriptor = self.registry.resolve(platform_version)?;
        self.install(descriptor, directory)
    }

    fn check_candidate(&self, candidate: &Path, descriptor: &ArtifactDescriptor) -> Validation {
        let validation = metadata::validate_file(candidate, self.config, descriptor);

        match &validation {
            Validation::Valid => {}
            Validation::Invalid(Mismatch::WrongPackage { id }) => {
                warn!(
                    path = %candidate.display(),
                    id = %id,
                    "Managed directory holds a jar of another mod, replacing it"
                );
            }
            Validation::Invalid(Mismatch::Outdated { installed, latest }) => {
                info!(
                    "Installed {} Version is outdated (installed: {}, latest: {})! Updating...",
                    self.config.display_name, installed, latest
                );
            }
            Validation::Unreadable(reason) => {
                let err = error::cache::metadata_read_failed(
                    candidate.display().to_string(),
                    reason.as_str(),
                );
                warn!(error = %err, "Failed to verify the installed jar, replacing it");
            }
        }

        validation
    }

    fn install(&self, descriptor: &ArtifactDescriptor, directory: &Path) -> Result<PathBuf> {
        let version_tag = descriptor.composite_version_tag();
        info!("Downloading {} {}...", self.config.display_name, version_tag);

        let dest = directory.join(descriptor.file_name(self.config));
        let url = descriptor.download_url(self.config);
        self.transport.download(&url, &dest)?;

        let marker = directory.join(&self.config.marker_file);
        if let Err(e) = common::fs::ensure_marker(&marker) {
            let err =
                error::cache::marker_creation_failed(marker.display().to_string(), e.to_string());
            warn!(error = %err, "Continuing without marker file");
        }

        info!(
            "Successfully downloaded {} {}",
            self.config.display_name, version_tag
        );
        Ok(dest)
    }
}
