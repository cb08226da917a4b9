//! File system operations on the managed directory

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::PackageConfig;

/// Package candidates directly inside `dir`, sorted by path
pub fn list_candidates(dir: &Path, config: &PackageConfig) -> io::Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;

        // Any entry type counts: a directory named like a jar must be removed too.
        if config.is_candidate(entry.file_name()) {
            candidates.push(entry.path());
        }
    }

    candidates.sort();
    Ok(candidates)
}

/// Remove a file, symlink or directory tree at `path`
pub fn remove_entry(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Delete `dir` with everything in it and recreate it empty
pub fn reset_dir(dir: &Path) -> io::Result<()> {
    fs::remove_dir_all(dir)?;
    fs::create_dir_all(dir)
}

/// Create an empty file at `path` unless something already exists there
///
/// Returns whether the file was created.
pub fn ensure_marker(path: &Path) -> io::Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}
