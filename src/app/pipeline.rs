//! Sequential orchestration of the three fixers.

use crate::app::FixContext;
use crate::app::fixers::{self, BuildOutcome, PreloadOutcome, SymlinkOutcome};
use crate::domain::{FixFailure, FixerKind, InstallationPath};
use crate::ports::{ArchiveDownloader, ArtifactBuilder, Reporter, SourceFetcher};

/// Everything a successful run left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub symlink: SymlinkOutcome,
    pub build: BuildOutcome,
    pub preload: PreloadOutcome,
}

/// Run symlink, build and preload fixers in order, stopping at the first failure.
///
/// Nothing is rolled back: fixers that completed before a failure keep their effects.
pub fn run<S, B, D, R>(
    ctx: &FixContext<S, B, D, R>,
    installation: &InstallationPath,
) -> Result<PatchReport, FixFailure>
where
    S: SourceFetcher,
    B: ArtifactBuilder,
    D: ArchiveDownloader,
    R: Reporter,
{
    let config = ctx.config();
    tracing::info!(installation = %installation.root().display(), "applying fixes");

    ctx.reporter().step_started(FixerKind::Symlink);
    let symlink = fixers::symlink::execute(&config.symlink, installation)?;

    ctx.reporter().step_started(FixerKind::Build);
    let build = fixers::build::execute(&config.build, ctx.fetcher(), ctx.builder(), installation)?;

    ctx.reporter().step_started(FixerKind::Preload);
    let preload = fixers::preload::execute(&config.preload, ctx.downloader(), ctx.reporter())?;

    Ok(PatchReport { symlink, build, preload })
}
