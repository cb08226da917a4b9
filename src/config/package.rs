//! Package identity
//!
//! Everything the registry and the reconciler need to know about the package
//! they manage. [`PackageConfig::default`] describes ReplayMod on Modrinth.

use std::ffi::OsStr;

use serde::Deserialize;

/// Modrinth project id of ReplayMod
const REPLAYMOD_PROJECT_ID: &str = "Nv2fQJo5";

/// ReplayMod release used when a registration does not name one
const REPLAYMOD_VERSION: &str = "2.6.15";

/// Identity of the package kept in the managed directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PackageConfig {
    /// Package id as embedded in the jar metadata. Also used as the file name
    /// prefix and as the managed subdirectory name.
    pub name: String,

    /// Human readable name used in log messages
    pub display_name: String,

    /// Immutable remote project id
    pub remote_project_id: String,

    /// Scheme and host of the CDN, without trailing slash
    pub cdn_base: String,

    /// Package version applied by `ArtifactRegistry::register`
    pub default_package_version: String,

    /// File extension of package files, without the dot
    pub extension: String,

    /// Path of the metadata entry inside the archive
    pub metadata_entry: String,

    /// Name of the advisory file written next to the package
    pub marker_file: String,

    /// Id of the mod loader that consumes the package
    pub loader_id: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: "replaymod".to_string(),
            display_name: "ReplayMod".to_string(),
            remote_project_id: REPLAYMOD_PROJECT_ID.to_string(),
            cdn_base: "https://cdn.modrinth.com".to_string(),
            default_package_version: REPLAYMOD_VERSION.to_string(),
            extension: "jar".to_string(),
            metadata_entry: "fabric.mod.json".to_string(),
            marker_file: "this is not a mod directory".to_string(),
            loader_id: "fabricloader".to_string(),
        }
    }
}

impl PackageConfig {
    /// Whether a directory entry name counts as a package candidate
    ///
    /// Compares raw bytes, so names that are not valid UTF-8 still count.
    pub fn is_candidate(&self, file_name: impl AsRef<OsStr>) -> bool {
        let suffix = format!(".{}", self.extension);
        file_name
            .as_ref()
            .as_encoded_bytes()
            .ends_with(suffix.as_bytes())
    }

    /// File name of a package release: `<name>-<platform>-<package>.<ext>`
    pub fn file_name(&self, platform_version: &str, package_version: &str) -> String {
        format!(
            "{}-{}-{}.{}",
            self.name, platform_version, package_version, self.extension
        )
    }
}
