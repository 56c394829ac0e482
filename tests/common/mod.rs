//! Common test utilities and helpers
//!
//! Shared helpers for the integration tests: a temporary working directory
//! and in-memory builders for SDL-shaped release archives.

use std::io::{Cursor, Write};
use std::path::PathBuf;

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Temporary working directory for a fetch run
pub struct TestDir {
    pub dir: TempDir,
}

impl TestDir {
    /// Create a new empty working directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a subdirectory
    pub fn create_dir(&self, name: &str) {
        std::fs::create_dir_all(self.dir.path().join(name)).expect("Failed to create directory");
    }

    /// Write a file into the directory
    pub fn write_file(&self, name: &str, content: &[u8]) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    /// Check whether a path exists inside the directory
    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Names of all entries directly inside the directory
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dir.path())
            .expect("Failed to read directory")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an SDL release zip with the expected `SDL3-<version>/` top-level
/// directory.
pub fn sdl_zip_bytes(version: &str) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default();
    let top = format!("SDL3-{version}");

    zip.add_directory(format!("{top}/"), opts).unwrap();
    zip.start_file(format!("{top}/include/SDL3/SDL.h"), opts)
        .unwrap();
    zip.write_all(b"#pragma once\n").unwrap();
    zip.start_file(format!("{top}/lib/pkgconfig/sdl3.pc"), opts)
        .unwrap();
    zip.write_all(b"Name: sdl3\n").unwrap();
    zip.start_file(format!("{top}/README.md"), opts).unwrap();
    zip.write_all(b"Simple DirectMedia Layer\n").unwrap();

    zip.finish().unwrap().into_inner()
}

/// Build a zip whose contents sit at the archive root, with no
/// `SDL3-<version>/` directory.
pub fn flat_zip_bytes() -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let opts = SimpleFileOptions::default();

    zip.start_file("include/SDL3/SDL.h", opts).unwrap();
    zip.write_all(b"#pragma once\n").unwrap();
    zip.start_file("README.md", opts).unwrap();
    zip.write_all(b"mispackaged\n").unwrap();

    zip.finish().unwrap().into_inner()
}
