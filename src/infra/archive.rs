//! Zip archive extraction

use std::fs::File;
use std::path::Path;

use zip::ZipArchive;

use crate::error::ArchiveError;

/// Extract the zip archive at `archive` into the directory `dest`.
///
/// Entry names that escape `dest` (absolute paths or `..` components) are
/// skipped. Unix permission bits stored in the archive are restored.
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<(), ArchiveError> {
    let file = File::open(archive).map_err(|e| ArchiveError::Open {
        path: archive.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut zip = ZipArchive::new(file).map_err(|e| ArchiveError::Format {
        path: archive.to_path_buf(),
        error: e.to_string(),
    })?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(|e| ArchiveError::Format {
            path: archive.to_path_buf(),
            error: e.to_string(),
        })?;

        let Some(relative) = entry.enclosed_name() else {
            tracing::warn!(name = entry.name(), "skipping unsafe archive entry");
            continue;
        };
        let outpath = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&outpath).map_err(|e| ArchiveError::Write {
                path: outpath.clone(),
                error: e.to_string(),
            })?;
        } else {
            if let Some(parent) = outpath.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ArchiveError::Write {
                    path: parent.to_path_buf(),
                    error: e.to_string(),
                })?;
            }
            let mut outfile = File::create(&outpath).map_err(|e| ArchiveError::Write {
                path: outpath.clone(),
                error: e.to_string(),
            })?;
            std::io::copy(&mut entry, &mut outfile).map_err(|e| ArchiveError::Write {
                path: outpath.clone(),
                error: e.to_string(),
            })?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                let _ = std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode));
            }
        }
    }

    Ok(())
}
