use url::Url;

use crate::domain::AppError;

/// Port for fetching a remote archive into memory.
pub trait ArchiveDownloader {
    /// Return the full response body of a GET request.
    fn download(&self, url: &Url) -> Result<Vec<u8>, AppError>;
}
