//! Jar metadata inspection
//!
//! A candidate jar is judged by the mod metadata entry embedded in it
//! (`fabric.mod.json` for ReplayMod). Only that entry is read: its `id` must
//! be the managed package and its `version` must equal the composite version
//! tag of the registered release.
//!
//! Inspection never fails. Anything that prevents reading the metadata yields
//! [`Validation::Unreadable`], which the reconciler treats like any other
//! invalid jar.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::config::PackageConfig;
use crate::error::{self, Result};
use crate::registry::ArtifactDescriptor;

/// Fields of the embedded metadata entry that identify a release
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModMetadata {
    pub id: String,
    pub version: String,
}

/// Outcome of inspecting a candidate jar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The jar is the expected package at the expected version
    Valid,
    /// The metadata was read but does not describe the expected release
    Invalid(Mismatch),
    /// The metadata could not be read
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Metadata belongs to another package
    WrongPackage { id: String },
    /// Right package, different version
    Outdated { installed: String, latest: String },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

#[derive(Debug, Error)]
enum InspectError {
    #[error("failed to open archive: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid archive: {0}")]
    Archive(ZipError),

    #[error("archive has no {0} entry")]
    MissingEntry(String),

    #[error("malformed metadata: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read the metadata entry from an archive
fn read_metadata<R: Read + Seek>(
    reader: R,
    entry: &str,
) -> std::result::Result<ModMetadata, InspectError> {
    let mut archive = ZipArchive::new(reader).map_err(InspectError::Archive)?;

    let mut file = match archive.by_name(entry) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Err(InspectError::MissingEntry(entry.to_string())),
        Err(e) => return Err(InspectError::Archive(e)),
    };

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Compare metadata against the release registered for the platform version
pub fn check_metadata(
    metadata: &ModMetadata,
    config: &PackageConfig,
    descriptor: &ArtifactDescriptor,
) -> std::result::Result<(), Mismatch> {
    if metadata.id != config.name {
        return Err(Mismatch::WrongPackage {
            id: metadata.id.clone(),
        });
    }

    let latest = descriptor.composite_version_tag();
    if metadata.version == latest {
        Ok(())
    } else {
        Err(Mismatch::Outdated {
            installed: metadata.version.clone(),
            latest,
        })
    }
}

/// Validate an archive held in any seekable reader
pub fn validate_archive<R: Read + Seek>(
    reader: R,
    config: &PackageConfig,
    descriptor: &ArtifactDescriptor,
) -> Validation {
    match read_metadata(reader, &config.metadata_entry) {
        Ok(metadata) => match check_metadata(&metadata, config, descriptor) {
            Ok(()) => Validation::Valid,
            Err(mismatch) => Validation::Invalid(mismatch),
        },
        Err(e) => Validation::Unreadable(e.to_string()),
    }
}

/// Validate a jar on disk
pub fn validate_file(
    path: &Path,
    config: &PackageConfig,
    descriptor: &ArtifactDescriptor,
) -> Validation {
    match File::open(path) {
        Ok(file) => validate_archive(file, config, descriptor),
        Err(e) => Validation::Unreadable(InspectError::Io(e).to_string()),
    }
}

/// Read the metadata of a jar on disk
pub fn inspect_file(path: &Path, config: &PackageConfig) -> Result<ModMetadata> {
    if !path.is_file() {
        return Err(error::fs::not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))?;

    read_metadata(file, &config.metadata_entry)
        .map_err(|e| error::cache::metadata_read_failed(path.display().to_string(), e.to_string()))
}
