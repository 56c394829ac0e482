//! Filesystem operations
//!
//! The real [`Workspace`] implementation over `std::fs`.

use std::path::Path;

use crate::core::install::Workspace;
use crate::error::{ArchiveError, FilesystemError};
use crate::infra::archive::extract_zip;

/// Workspace backed by the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskWorkspace;

impl Workspace for DiskWorkspace {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn extract_archive(&self, archive: &Path, dest: &Path) -> Result<(), ArchiveError> {
        extract_zip(archive, dest)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FilesystemError> {
        std::fs::rename(from, to).map_err(|e| FilesystemError::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            error: e.to_string(),
        })
    }

    fn remove_file(&self, path: &Path) -> Result<(), FilesystemError> {
        std::fs::remove_file(path).map_err(|e| FilesystemError::RemoveFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists() {
        let temp = TempDir::new().unwrap();
        let ws = DiskWorkspace;
        assert!(ws.exists(temp.path()));
        assert!(!ws.exists(&temp.path().join("nope")));
    }

    #[test]
    fn test_rename_directory() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("SDL3-3.2.26");
        let to = temp.path().join("SDL3_MinGW");
        std::fs::create_dir(&from).unwrap();
        std::fs::write(from.join("marker"), "x").unwrap();

        let ws = DiskWorkspace;
        ws.rename(&from, &to).unwrap();

        assert!(!from.exists());
        assert!(to.join("marker").is_file());
    }

    #[test]
    fn test_rename_missing_source_fails() {
        let temp = TempDir::new().unwrap();
        let ws = DiskWorkspace;
        let err = ws
            .rename(&temp.path().join("absent"), &temp.path().join("dest"))
            .unwrap_err();
        assert!(matches!(err, FilesystemError::Rename { .. }));
    }

    #[test]
    fn test_remove_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("archive.zip");
        std::fs::write(&file, "x").unwrap();

        let ws = DiskWorkspace;
        ws.remove_file(&file).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn test_remove_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let ws = DiskWorkspace;
        let err = ws.remove_file(&temp.path().join("absent.zip")).unwrap_err();
        assert!(matches!(err, FilesystemError::RemoveFile { .. }));
    }
}
