use std::path::PathBuf;

use crate::domain::AppError;

/// Arguments for one publish invocation of the build toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Project directory inside the cloned source.
    pub project_dir: PathBuf,
    /// Target framework moniker, e.g. `net462`.
    pub target_framework: String,
}

/// Port for the external build toolchain.
pub trait ArtifactBuilder {
    /// Publish the project. A non-zero toolchain exit is an error.
    fn publish(&self, request: &BuildRequest) -> Result<(), AppError>;
}
