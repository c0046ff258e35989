//! Rebuild of the Brotli managed library.
//!
//! The Brotli implementation shipped with the application is broken on Linux
//! and causes sync issues. The fix clones a patched fork, publishes it with the
//! .NET toolchain and copies the result over the shipped assembly together
//! with its native runtime files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{
    AppError, BuildFixConfig, FixFailure, FixStage, FixerKind, InstallationPath, StageContext,
};
use crate::ports::{ArtifactBuilder, BuildRequest, SourceFetcher};
use crate::services::filesystem;

const FIXER: FixerKind = FixerKind::Build;

/// Files written into the installation by the build fixer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub library: PathBuf,
    pub runtimes: PathBuf,
    pub runtime_files: u64,
}

/// Reset the scratch workspace, fetch, build and install.
///
/// Any stage failure aborts the remaining stages; the workspace is left as is.
pub fn execute<S, B>(
    config: &BuildFixConfig,
    fetcher: &S,
    builder: &B,
    installation: &InstallationPath,
) -> Result<BuildOutcome, FixFailure>
where
    S: SourceFetcher,
    B: ArtifactBuilder,
{
    let scratch = &config.scratch_dir;

    filesystem::reset_dir(scratch).at_stage(FIXER, FixStage::ResetWorkspace)?;
    tracing::debug!(path = %scratch.display(), "scratch workspace reset");

    fetcher.fetch(&config.repository_url, scratch).at_stage(FIXER, FixStage::FetchSource)?;

    let request = BuildRequest {
        project_dir: config.project_dir(),
        target_framework: config.target_framework.clone(),
    };
    builder.publish(&request).at_stage(FIXER, FixStage::Build)?;

    let publish_dir = config.publish_dir();
    let library = install_library(config, &publish_dir, installation)
        .at_stage(FIXER, FixStage::InstallLibrary)?;

    let runtimes = installation.managed_dir().join(&config.runtimes_dir);
    let runtime_files = filesystem::copy_tree(&publish_dir.join(&config.runtimes_dir), &runtimes)
        .at_stage(FIXER, FixStage::InstallRuntimes)?;
    tracing::info!(path = %runtimes.display(), files = runtime_files, "runtime files installed");

    Ok(BuildOutcome { library, runtimes, runtime_files })
}

fn install_library(
    config: &BuildFixConfig,
    publish_dir: &Path,
    installation: &InstallationPath,
) -> Result<PathBuf, AppError> {
    let managed = installation.managed_dir();
    if !managed.is_dir() {
        return Err(AppError::MissingDirectory(managed));
    }

    let source = publish_dir.join(&config.primary_library);
    let bytes = fs::read(&source).map_err(|e| AppError::filesystem("read", &source, e))?;

    let destination = managed.join(&config.primary_library);
    filesystem::write_restricted(&destination, &bytes)?;
    tracing::info!(path = %destination.display(), bytes = bytes.len(), "library installed");

    Ok(destination)
}
