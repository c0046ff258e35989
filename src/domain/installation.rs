use std::path::{Path, PathBuf};

use super::AppError;

const PLUGINS_DIR: &str = "Plugins";
const MANAGED_DIR: &str = "Managed";

/// Absolute path to the application's data directory (e.g. `Resonite_Data`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationPath {
    root: PathBuf,
}

impl InstallationPath {
    /// Accept an absolute path to an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();

        if !root.is_absolute() {
            return Err(AppError::InvalidInstallation {
                path: root,
                reason: "path must be absolute".to_string(),
            });
        }
        if !root.is_dir() {
            return Err(AppError::InvalidInstallation {
                path: root,
                reason: "directory does not exist".to_string(),
            });
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Native plugin directory.
    pub fn plugins_dir(&self) -> PathBuf {
        self.root.join(PLUGINS_DIR)
    }

    /// Managed assembly directory.
    pub fn managed_dir(&self) -> PathBuf {
        self.root.join(MANAGED_DIR)
    }
}
