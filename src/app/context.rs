use crate::domain::FixConfig;
use crate::ports::{ArchiveDownloader, ArtifactBuilder, Reporter, SourceFetcher};

/// Configuration and collaborators for one pipeline run.
pub struct FixContext<S, B, D, R>
where
    S: SourceFetcher,
    B: ArtifactBuilder,
    D: ArchiveDownloader,
    R: Reporter,
{
    config: FixConfig,
    fetcher: S,
    builder: B,
    downloader: D,
    reporter: R,
}

impl<S, B, D, R> FixContext<S, B, D, R>
where
    S: SourceFetcher,
    B: ArtifactBuilder,
    D: ArchiveDownloader,
    R: Reporter,
{
    /// Create a new fix context.
    pub fn new(config: FixConfig, fetcher: S, builder: B, downloader: D, reporter: R) -> Self {
        Self { config, fetcher, builder, downloader, reporter }
    }

    pub fn config(&self) -> &FixConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &S {
        &self.fetcher
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn downloader(&self) -> &D {
        &self.downloader
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
