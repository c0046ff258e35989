use std::sync::Mutex;

use url::Url;

use crate::domain::AppError;
use crate::ports::ArchiveDownloader;

/// Serves a fixed body for every download.
pub struct FakeDownloader {
    body: Option<Vec<u8>>,
    requested: Mutex<Vec<Url>>,
}

impl FakeDownloader {
    pub fn serving(body: Vec<u8>) -> Self {
        Self { body: Some(body), requested: Mutex::new(Vec::new()) }
    }

    pub fn failing() -> Self {
        Self { body: None, requested: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

impl ArchiveDownloader for FakeDownloader {
    fn download(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        self.requested.lock().unwrap().push(url.clone());
        self.body.clone().ok_or_else(|| AppError::DownloadFailed {
            url: url.to_string(),
            details: "connection refused".to_string(),
            status: None,
        })
    }
}
