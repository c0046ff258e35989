//! Archive download implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::ArchiveDownloader;

/// Blocking HTTP transport for archive downloads.
///
/// Performs a single GET per call; there is no retry.
#[derive(Debug, Clone)]
pub struct HttpArchiveDownloader {
    client: Client,
}

impl HttpArchiveDownloader {
    /// Create a downloader. `timeout` of `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::config_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl ArchiveDownloader for HttpArchiveDownloader {
    fn download(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        tracing::debug!(%url, "downloading archive");

        let response = self.client.get(url.clone()).send().map_err(|e| {
            AppError::DownloadFailed {
                url: url.to_string(),
                details: format!("HTTP request failed: {}", e),
                status: None,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::DownloadFailed {
                url: url.to_string(),
                details: format!("server responded with {}", status),
                status: Some(status.as_u16()),
            });
        }

        let body = response.bytes().map_err(|e| AppError::DownloadFailed {
            url: url.to_string(),
            details: format!("Failed to read response body: {}", e),
            status: Some(status.as_u16()),
        })?;

        tracing::debug!(%url, bytes = body.len(), "archive downloaded");
        Ok(body.to_vec())
    }
}
