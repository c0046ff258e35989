//! Case-variant link for the FreeImage plugin.
//!
//! The application loads `libFreeimage.so` while the shipped file is
//! `libFreeImage.so`; on a case-sensitive filesystem the lookup fails.

use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::PathBuf;

use crate::domain::{AppError, FixFailure, FixStage, FixerKind, InstallationPath, SymlinkFixConfig};

const FIXER: FixerKind = FixerKind::Symlink;

/// Link created by the symlink fixer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymlinkOutcome {
    pub link: PathBuf,
    pub target: PathBuf,
}

/// Create `Plugins/<link_name>` pointing at `Plugins/<target_name>`.
///
/// Not idempotent: an existing link path is an error.
pub fn execute(
    config: &SymlinkFixConfig,
    installation: &InstallationPath,
) -> Result<SymlinkOutcome, FixFailure> {
    let plugins = installation.plugins_dir();
    if !plugins.is_dir() {
        return Err(fail(AppError::MissingDirectory(plugins)));
    }

    let link = plugins.join(&config.link_name);
    let target = plugins.join(&config.target_name);

    if fs::symlink_metadata(&link).is_ok() {
        return Err(fail(AppError::AlreadyExists(link)));
    }
    if !target.exists() {
        tracing::warn!(path = %target.display(), "link target missing; creating dangling link");
    }

    symlink(&target, &link).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            fail(AppError::AlreadyExists(link.clone()))
        } else {
            fail(AppError::filesystem("create symlink", &link, e))
        }
    })?;

    tracing::info!(link = %link.display(), points_to = %target.display(), "plugin symlink created");
    Ok(SymlinkOutcome { link, target })
}

fn fail(source: AppError) -> FixFailure {
    FixFailure::new(FIXER, FixStage::LinkPlugin, source)
}
