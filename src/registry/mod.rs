//! Artifact registry
//!
//! Maps a game version to the remote release that should be installed for it.
//! The registry is built once at startup, either from the table compiled into
//! the binary ([`ArtifactRegistry::builtin`]) or by calling
//! [`ArtifactRegistry::register`], and is only read afterwards.

pub mod descriptor;

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Deserialize;

use crate::config::PackageConfig;
use crate::error::{self, Result};

pub use descriptor::ArtifactDescriptor;

/// Registry table shipped with the binary
const BUILTIN_REGISTRY: &str = include_str!("builtin.yaml");

/// Registry of remote releases, keyed by platform version
#[derive(Debug, Clone)]
pub struct ArtifactRegistry {
    default_package_version: String,
    artifacts: HashMap<String, ArtifactDescriptor>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RegistryFile {
    artifacts: Vec<RegistryEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RegistryEntry {
    platform_version: String,
    remote_version_id: String,
    #[serde(default)]
    package_version: Option<String>,
}

impl ArtifactRegistry {
    /// Create an empty registry
    pub fn new(default_package_version: impl Into<String>) -> Self {
        Self {
            default_package_version: default_package_version.into(),
            artifacts: HashMap::new(),
        }
    }

    /// Create a registry populated with the releases shipped in the binary
    pub fn builtin(config: &PackageConfig) -> Result<Self> {
        Self::from_yaml_str(&config.default_package_version, BUILTIN_REGISTRY)
    }

    /// Parse a registry table
    ///
    /// Later entries for the same platform version replace earlier ones.
    pub fn from_yaml_str(default_package_version: &str, yaml: &str) -> Result<Self> {
        let file: RegistryFile = serde_yaml::from_str(yaml)?;
        let mut registry = Self::new(default_package_version);

        for entry in file.artifacts {
            if entry.platform_version.trim().is_empty() {
                return Err(error::registry::parse_failed("empty platform-version"));
            }
            if entry.remote_version_id.trim().is_empty() {
                return Err(error::registry::parse_failed(format!(
                    "empty remote-version-id for {}",
                    entry.platform_version
                )));
            }

            match entry.package_version {
                Some(package_version) => registry.register_with_version(
                    entry.platform_version,
                    entry.remote_version_id,
                    package_version,
                ),
                None => registry.register(entry.platform_version, entry.remote_version_id),
            }
        }

        Ok(registry)
    }

    /// Register a release using the default package version
    pub fn register(
        &mut self,
        platform_version: impl Into<String>,
        remote_version_id: impl Into<String>,
    ) {
        let package_version = self.default_package_version.clone();
        self.register_with_version(platform_version, remote_version_id, package_version);
    }

    /// Register a release, replacing any previous one for the same platform version
    pub fn register_with_version(
        &mut self,
        platform_version: impl Into<String>,
        remote_version_id: impl Into<String>,
        package_version: impl Into<String>,
    ) {
        let descriptor =
            ArtifactDescriptor::new(platform_version, remote_version_id, package_version);
        self.artifacts
            .insert(descriptor.platform_version.clone(), descriptor);
    }

    /// Look up the release for a platform version
    pub fn resolve(&self, platform_version: &str) -> Result<&ArtifactDescriptor> {
        self.artifacts
            .get(platform_version)
            .ok_or_else(|| error::registry::unregistered_version(platform_version))
    }

    /// Registered releases, newest platform version first
    pub fn versions(&self) -> Vec<&ArtifactDescriptor> {
        let mut descriptors: Vec<&ArtifactDescriptor> = self.artifacts.values().collect();
        descriptors.sort_by(|a, b| compare_versions(&b.platform_version, &a.platform_version));
        descriptors
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// Compare dotted versions component-wise, numerically where both sides parse
fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = match (l.parse::<u64>(), r.parse::<u64>()) {
                    (Ok(l), Ok(r)) => l.cmp(&r),
                    _ => l.cmp(r),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}
