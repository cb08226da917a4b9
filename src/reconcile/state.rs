//! Managed directory classification

use std::io;
use std::path::{Path, PathBuf};

use crate::common::fs::list_candidates;
use crate::config::PackageConfig;

/// Package candidates found in an existing managed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryState {
    Empty,
    Single(PathBuf),
    Multiple(Vec<PathBuf>),
}

impl DirectoryState {
    /// Scan `dir`; files without the package extension are not counted
    pub fn scan(dir: &Path, config: &PackageConfig) -> io::Result<Self> {
        Ok(Self::from_candidates(list_candidates(dir, config)?))
    }

    pub fn from_candidates(mut candidates: Vec<PathBuf>) -> Self {
        match candidates.len() {
            0 => DirectoryState::Empty,
            1 => DirectoryState::Single(candidates.remove(0)),
            _ => DirectoryState::Multiple(candidates),
        }
    }
}
