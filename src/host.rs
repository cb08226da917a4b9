//! Mod loader discovery adapter
//!
//! The host launcher asks every addon for extra mod files while the mod loader
//! discovers mods. [`discover`] answers that request: it only reacts to the
//! configured loader, installs the jar under the loader's first mod directory
//! and never fails the host. Errors are logged and the jar is simply not added.

use std::path::{Path, PathBuf};

use tracing::error;

use crate::error::{self, Result};
use crate::reconcile::Reconciler;
use crate::transport::Transport;

/// A mod loader announcing its discovery phase
#[derive(Debug, Clone)]
pub struct ModLoaderDiscovery {
    /// Id of the announcing loader (e.g. `fabricloader`)
    pub loader_id: String,
    /// Directories the loader scans, in priority order
    pub mod_directories: Vec<PathBuf>,
}

impl ModLoaderDiscovery {
    pub fn new(loader_id: impl Into<String>, mod_directories: Vec<PathBuf>) -> Self {
        Self {
            loader_id: loader_id.into(),
            mod_directories,
        }
    }

    /// Directory the managed subdirectory is created in
    pub fn base_directory(&self) -> Result<&Path> {
        self.mod_directories
            .first()
            .map(PathBuf::as_path)
            .ok_or_else(error::cache::no_mod_directory)
    }
}

/// Provide the jar for `platform_version` to a discovering mod loader
///
/// Returns the path to add to the loader's discovery, or `None` when the
/// loader is not the configured one or installation failed.
pub fn discover<T: Transport>(
    reconciler: &Reconciler<'_, T>,
    platform_version: &str,
    discovery: &ModLoaderDiscovery,
) -> Option<PathBuf> {
    let config = reconciler.config();
    if discovery.loader_id != config.loader_id {
        return None;
    }

    let base = match discovery.base_directory() {
        Ok(base) => base,
        Err(e) => {
            error!(
                "{e}. Skipping {} installation",
                config.display_name.to_lowercase()
            );
            return None;
        }
    };

    match reconciler.ensure_in_base(platform_version, base) {
        Ok(path) => Some(path),
        Err(e) => {
            error!(error = %e, "Failed to load {}", config.display_name.to_lowercase());
            None
        }
    }
}
