//! resonite-fixes: apply Linux compatibility fixes to a Resonite installation.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


use std::path::Path;

use adapters::{ConsoleReporter, DotnetPublisher, GitCloneFetcher, HttpArchiveDownloader};

pub use app::pipeline::run;
pub use app::{FixContext, PatchReport};
pub use domain::{
    AppError, ArchiveEntrySelector, FixConfig, FixFailure, FixStage, FixerKind, InstallationPath,
};

/// Apply all fixes to the data directory at `installation`.
///
/// The data home is resolved from the environment once, before any fixer runs.
pub fn apply(installation: &Path) -> Result<PatchReport, AppError> {
    let config = FixConfig::resolve()?;
    apply_with_config(installation, config)
}

/// Apply all fixes using an explicit configuration and the real collaborators.
pub fn apply_with_config(installation: &Path, config: FixConfig) -> Result<PatchReport, AppError> {
    config.validate()?;
    let installation = InstallationPath::new(installation)?;

    let downloader = HttpArchiveDownloader::new(config.preload.http_timeout)?;
    let builder = DotnetPublisher::new(config.build.toolchain_program.clone());
    let ctx = FixContext::new(config, GitCloneFetcher::new(), builder, downloader, ConsoleReporter);

    let report = run(&ctx, &installation)?;
    Ok(report)
}
