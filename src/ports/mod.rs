mod archive_downloader;
mod artifact_builder;
mod reporter;
mod source_fetcher;

pub use archive_downloader::ArchiveDownloader;
pub use artifact_builder::{ArtifactBuilder, BuildRequest};
pub use reporter::Reporter;
pub use source_fetcher::SourceFetcher;
