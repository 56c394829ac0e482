//! Error types for sdl3fetch
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Download errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Network error
    #[error("Network error downloading '{url}': {error}")]
    NetworkError { url: String, error: String },

    /// Server responded with a non-success status
    #[error("Server returned HTTP {status} for '{url}'")]
    HttpStatus { url: String, status: u16 },

    /// IO error while writing the archive
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Archive extraction errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Archive could not be opened
    #[error("Failed to open archive '{path}': {error}")]
    Open { path: PathBuf, error: String },

    /// Archive is corrupt or not a valid zip
    #[error("Invalid or corrupt archive '{path}': {error}")]
    Format { path: PathBuf, error: String },

    /// IO error while writing an extracted entry
    #[error("Failed to write extracted entry '{path}': {error}")]
    Write { path: PathBuf, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to rename a directory
    #[error("Failed to rename '{from}' to '{to}': {error}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to remove a file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },
}
