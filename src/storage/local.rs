// src/storage/local.rs

//! Local filesystem persistence for crawl results.
//!
//! Two independent outputs: the artifact bytes themselves, written into an
//! output directory, and a plain-text export of the artifact URL list. A
//! failure on one artifact never stops the rest.

use std::path::{Path, PathBuf};

use reqwest::Client;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::error::{AppError, Result};
use crate::utils::file_name_from_url;

/// Downloads artifacts into a local directory.
///
/// Files are named by the URL's final path segment; an existing file of the
/// same name is overwritten without warning.
pub struct LocalStore {
    client: Client,
    output_dir: PathBuf,
}

/// Per-run download tally.
#[derive(Debug, Default)]
pub struct SaveSummary {
    pub saved: Vec<PathBuf>,
    pub failures: Vec<SaveFailure>,
}

/// One artifact that could not be written.
#[derive(Debug)]
pub struct SaveFailure {
    pub url: Url,
    pub reason: String,
}

impl LocalStore {
    pub fn new(client: Client, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
        }
    }

    /// Download every artifact, one at a time, containing per-file failures.
    ///
    /// Only creating the output directory itself is fatal.
    pub async fn save_artifacts(&self, artifacts: &[Url]) -> Result<SaveSummary> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let mut summary = SaveSummary::default();
        for url in artifacts {
            match self.save_one(url).await {
                Ok(path) => {
                    log::info!("downloaded {} -> {}", url, path.display());
                    summary.saved.push(path);
                }
                Err(e) => {
                    log::warn!("failed to download {url}: {e}");
                    summary.failures.push(SaveFailure {
                        url: url.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        Ok(summary)
    }

    async fn save_one(&self, url: &Url) -> Result<PathBuf> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::storage(format!("HTTP status {status} for {url}")));
        }

        let bytes = response.bytes().await?;
        let path = self.output_dir.join(file_name_from_url(url));

        let mut file = tokio::fs::File::create(&path).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;

        Ok(path)
    }
}

/// Write the artifact URL list as newline-delimited plain text.
///
/// Replaces any previous file at `path`.
pub async fn export_url_list(path: &Path, artifacts: &[Url]) -> Result<()> {
    let mut content = artifacts
        .iter()
        .map(Url::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    tokio::fs::write(path, content).await?;
    Ok(())
}
