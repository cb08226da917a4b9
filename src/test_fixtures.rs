//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides helpers to create temp directories, in-memory jars and
//! a transport double that serves jars without touching the network.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, replaymod_jar, StubTransport};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let transport = StubTransport::serving(replaymod_jar("1.20.4-2.6.15"));
//!     // ... reconcile into temp.path() ...
//!     assert_eq!(transport.calls(), 1);
//! }
//! ```

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{self, Result};
use crate::transport::Transport;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Build a zip archive in memory from `(entry name, content)` pairs.
///
/// # Panics
///
/// Panics if the archive cannot be written.
#[must_use]
pub fn build_jar(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        writer
            .write_all(content.as_bytes())
            .expect("Failed to write zip entry");
    }
    writer
        .finish()
        .expect("Failed to finish zip archive")
        .into_inner()
}

/// Minimal `fabric.mod.json` document
#[must_use]
pub fn metadata_json(id: &str, version: &str) -> String {
    format!(r#"{{"schemaVersion": 1, "id": "{id}", "version": "{version}", "name": "Test"}}"#)
}

/// A ReplayMod jar whose metadata carries the given composite version tag
#[must_use]
pub fn replaymod_jar(version_tag: &str) -> Vec<u8> {
    build_jar(&[
        ("META-INF/MANIFEST.MF", "Manifest-Version: 1.0\n"),
        (
            "fabric.mod.json",
            metadata_json("replaymod", version_tag).as_str(),
        ),
    ])
}

/// Write bytes to `dir/name` and return the path.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write fixture file");
    path
}

/// Sorted file names in a directory.
///
/// # Panics
///
/// Panics if the directory cannot be read.
#[must_use]
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Transport double that writes a fixed body and records requested URLs
pub struct StubTransport {
    body: Option<Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl StubTransport {
    /// Serve `body` for every request
    #[must_use]
    pub fn serving(body: Vec<u8>) -> Self {
        Self {
            body: Some(body),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Fail every request
    #[must_use]
    pub fn failing() -> Self {
        Self {
            body: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for StubTransport {
    fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        self.requests.borrow_mut().push(url.to_string());
        match &self.body {
            Some(body) => {
                std::fs::write(dest, body)?;
                Ok(body.len() as u64)
            }
            None => Err(error::download::failed(url, "connection refused")),
        }
    }
}
