//! HTTP download functionality
//!
//! Downloads the release archive in a single attempt with progress
//! reporting. There is no retry and no resume; a failed attempt removes the
//! partial file and surfaces the error unchanged.

use futures::StreamExt;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::config::defaults;
use crate::core::install::Fetcher;
use crate::error::DownloadError;

/// Progress callback type for download progress reporting
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// Download result containing file path and metadata
#[derive(Debug)]
pub struct DownloadResult {
    /// Path to the downloaded file
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// SHA256 checksum of the downloaded content
    ///
    /// Logged for diagnostics; nothing is verified against it.
    pub checksum: String,
}

/// HTTP fetcher for the release archive
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    /// HTTP client
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a new fetcher with the default timeouts
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(defaults::DOWNLOAD_TIMEOUT_SECS))
                .connect_timeout(Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Get the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    async fn download_once(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<&ProgressCallback>,
    ) -> Result<DownloadResult, DownloadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::NetworkError {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DownloadError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let total_size = response.content_length().unwrap_or(0);

        // Create parent directories if needed
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DownloadError::IoError {
                    path: parent.to_path_buf(),
                    error: e.to_string(),
                })?;
        }

        let mut file = File::create(dest)
            .await
            .map_err(|e| DownloadError::IoError {
                path: dest.to_path_buf(),
                error: e.to_string(),
            })?;

        let mut hasher = Sha256::new();
        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| DownloadError::NetworkError {
                url: url.to_string(),
                error: e.to_string(),
            })?;

            file.write_all(&chunk)
                .await
                .map_err(|e| DownloadError::IoError {
                    path: dest.to_path_buf(),
                    error: e.to_string(),
                })?;

            hasher.update(&chunk);
            downloaded += chunk.len() as u64;

            if let Some(cb) = progress {
                cb(downloaded, total_size);
            }
        }

        file.flush().await.map_err(|e| DownloadError::IoError {
            path: dest.to_path_buf(),
            error: e.to_string(),
        })?;

        let checksum = hex::encode(hasher.finalize());

        Ok(DownloadResult {
            path: dest.to_path_buf(),
            size: downloaded,
            checksum,
        })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    async fn download(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<ProgressCallback>,
    ) -> Result<DownloadResult, DownloadError> {
        match self.download_once(url, dest, progress.as_ref()).await {
            Ok(result) => Ok(result),
            Err(e) => {
                // Clean up partial download on failure
                let _ = tokio::fs::remove_file(dest).await;
                Err(e)
            }
        }
    }
}
