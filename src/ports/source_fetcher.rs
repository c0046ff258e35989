use std::path::Path;

use crate::domain::AppError;

/// Port for fetching a version-controlled source tree.
pub trait SourceFetcher {
    /// Clone `url` at its default branch tip into the empty directory `dest`.
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), AppError>;
}
