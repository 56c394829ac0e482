//! The five-step install workflow
//!
//! This module contains the logic for ensuring the prebuilt SDL3 package is
//! present under its canonical directory: check for an existing install,
//! acquire the release archive, unpack it, move the extracted directory into
//! place, and remove the archive.
//!
//! The workflow talks to the network and the disk only through the
//! [`Fetcher`] and [`Workspace`] capabilities, so it can be exercised with
//! in-memory fakes.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{defaults, urls};
use crate::core::toolchain::Toolchain;
use crate::error::{ArchiveError, DownloadError, FilesystemError};
use crate::infra::download::{DownloadResult, ProgressCallback};

/// Errors that can occur during the install workflow
///
/// Every variant is terminal: the workflow never retries and never rolls
/// back steps that already completed.
#[derive(Error, Debug)]
pub enum InstallError {
    /// Archive download failed
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// Archive could not be unpacked
    #[error("Extraction error: {0}")]
    Archive(#[from] ArchiveError),

    /// The version-tagged directory was not produced by extraction
    #[error("Folder '{expected}' not found after extraction")]
    StagingMissing { expected: PathBuf },

    /// Renaming the extracted directory failed
    #[error("Rename error: {0}")]
    Filesystem(#[from] FilesystemError),
}

/// Network capability used by the workflow
///
/// The single method performs one blocking-equivalent GET with no retry;
/// a failed attempt leaves no partial file behind.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Download `url` into the file at `dest`
    async fn download(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<ProgressCallback>,
    ) -> Result<DownloadResult, DownloadError>;
}

/// Filesystem capability used by the workflow
pub trait Workspace {
    /// Whether a file or directory exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Unpack the zip archive at `archive` into the directory `dest`
    fn extract_archive(&self, archive: &Path, dest: &Path) -> Result<(), ArchiveError>;

    /// Rename a directory
    fn rename(&self, from: &Path, to: &Path) -> Result<(), FilesystemError>;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> Result<(), FilesystemError>;
}

/// Install configuration
///
/// An explicit value passed into the workflow instead of hard-coded
/// globals; every derived path and URL is a pure function of this struct
/// and the chosen [`Toolchain`].
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Directory the package is installed into (normally the working dir)
    pub root: PathBuf,
    /// SDL3 release version, e.g. `3.2.26`
    pub version: String,
    /// Release host base URL, without trailing slash
    pub base_url: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            version: defaults::SDL_VERSION.to_string(),
            base_url: urls::SDL_RELEASE_BASE.to_string(),
        }
    }
}

impl InstallConfig {
    /// Release archive file name for a toolchain
    pub fn archive_name(&self, toolchain: Toolchain) -> String {
        format!(
            "SDL3-devel-{}-{}.zip",
            self.version,
            toolchain.archive_tag()
        )
    }

    /// Local path the archive is downloaded to
    pub fn archive_path(&self, toolchain: Toolchain) -> PathBuf {
        self.root.join(self.archive_name(toolchain))
    }

    /// Full download URL for a toolchain
    pub fn url(&self, toolchain: Toolchain) -> String {
        format!("{}/{}", self.base_url, self.archive_name(toolchain))
    }

    /// Version-tagged directory produced by extraction
    pub fn staging_dir(&self) -> PathBuf {
        self.root.join(format!("SDL3-{}", self.version))
    }

    /// Canonical destination directory for a toolchain
    pub fn dest_dir(&self, toolchain: Toolchain) -> PathBuf {
        self.root.join(toolchain.dest_dir_name())
    }
}

/// Progress notification emitted as the workflow moves between steps
///
/// Presentation lives in the CLI layer; the workflow only announces what it
/// is about to do (or just did, for `ArchiveRemoved`).
#[derive(Debug, Clone)]
pub enum StepEvent {
    /// Fetching the archive from the release host
    Downloading { url: String },
    /// A local archive was found and the network is skipped
    ReusingArchive { path: PathBuf },
    /// Unpacking the archive
    Extracting { archive: PathBuf },
    /// Moving the extracted directory to its canonical name
    Renaming { from: PathBuf, to: PathBuf },
    /// The archive was deleted after successful placement
    ArchiveRemoved { path: PathBuf },
}

/// Result of running the install workflow
#[derive(Debug)]
pub enum InstallOutcome {
    /// Destination already present; nothing was touched
    AlreadyInstalled {
        /// The canonical destination directory
        dest: PathBuf,
    },
    /// Package downloaded (or reused) and placed
    Installed {
        /// The canonical destination directory
        dest: PathBuf,
        /// Whether a pre-existing local archive was used instead of the network
        archive_reused: bool,
        /// Set when deleting the archive failed; never affects success
        cleanup_warning: Option<String>,
    },
}

impl InstallOutcome {
    /// The canonical destination directory of this outcome
    pub fn dest(&self) -> &Path {
        match self {
            InstallOutcome::AlreadyInstalled { dest }
            | InstallOutcome::Installed { dest, .. } => dest,
        }
    }
}

/// Ensure the SDL3 package for `toolchain` exists under its canonical name.
///
/// Steps run in order and short-circuit on the first failure:
/// destination check, archive acquisition, extraction, rename, archive
/// cleanup. Only the cleanup step is allowed to fail without failing the
/// run.
pub async fn install<F: Fetcher, W: Workspace, R: Fn(StepEvent)>(
    config: &InstallConfig,
    toolchain: Toolchain,
    fetcher: &F,
    workspace: &W,
    progress: Option<ProgressCallback>,
    report: R,
) -> Result<InstallOutcome, InstallError> {
    let dest = config.dest_dir(toolchain);
    if workspace.exists(&dest) {
        tracing::info!(dest = %dest.display(), "already installed");
        return Ok(InstallOutcome::AlreadyInstalled { dest });
    }

    let archive = config.archive_path(toolchain);
    let archive_reused = workspace.exists(&archive);
    if archive_reused {
        tracing::info!(archive = %archive.display(), "reusing existing archive");
        report(StepEvent::ReusingArchive {
            path: archive.clone(),
        });
    } else {
        let url = config.url(toolchain);
        tracing::info!(%url, "downloading archive");
        report(StepEvent::Downloading { url: url.clone() });
        let result = fetcher.download(&url, &archive, progress).await?;
        tracing::debug!(
            size = result.size,
            checksum = %result.checksum,
            "download complete"
        );
    }

    tracing::info!(archive = %archive.display(), "extracting archive");
    report(StepEvent::Extracting {
        archive: archive.clone(),
    });
    workspace.extract_archive(&archive, &config.root)?;

    let staging = config.staging_dir();
    if !workspace.exists(&staging) {
        return Err(InstallError::StagingMissing { expected: staging });
    }

    tracing::info!(from = %staging.display(), to = %dest.display(), "renaming");
    report(StepEvent::Renaming {
        from: staging.clone(),
        to: dest.clone(),
    });
    workspace.rename(&staging, &dest)?;

    // Best effort; a leftover archive is not worth failing the run over.
    let cleanup_warning = match workspace.remove_file(&archive) {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!(archive = %archive.display(), error = %e, "failed to remove archive");
            Some(e.to_string())
        }
    };
    if cleanup_warning.is_none() {
        report(StepEvent::ArchiveRemoved { path: archive });
    }

    Ok(InstallOutcome::Installed {
        dest,
        archive_reused,
        cleanup_warning,
    })
}
