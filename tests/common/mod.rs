//! Common test utilities for replaymod-fetch integration tests

use std::io::{Cursor, Write};
use std::path::PathBuf;

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// A temporary Fabric instance with a mods directory
pub struct TestInstance {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the mods directory
    pub mods_dir: PathBuf,
}

impl TestInstance {
    /// Create a new instance with an empty mods directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let mods_dir = temp.path().join("mods");
        std::fs::create_dir_all(&mods_dir).expect("Failed to create mods directory");
        Self { temp, mods_dir }
    }

    /// The subdirectory managed by replaymod-fetch
    pub fn managed_dir(&self) -> PathBuf {
        self.mods_dir.join("replaymod")
    }

    /// Write a jar with a `fabric.mod.json` entry into the managed directory
    pub fn write_managed_jar(&self, file_name: &str, id: &str, version: &str) -> PathBuf {
        let dir = self.managed_dir();
        std::fs::create_dir_all(&dir).expect("Failed to create managed directory");
        let path = dir.join(file_name);
        std::fs::write(&path, mod_jar(id, version)).expect("Failed to write jar");
        path
    }
}

impl Default for TestInstance {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a jar whose `fabric.mod.json` carries `id` and `version`
pub fn mod_jar(id: &str, version: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("fabric.mod.json", SimpleFileOptions::default())
        .expect("Failed to start zip entry");
    write!(writer, r#"{{"schemaVersion": 1, "id": "{id}", "version": "{version}"}}"#)
        .expect("Failed to write zip entry");
    writer
        .finish()
        .expect("Failed to finish zip archive")
        .into_inner()
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn fetch_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("replaymod-fetch").expect("binary should be built")
}
