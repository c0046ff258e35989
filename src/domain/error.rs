use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::fixer::{FixStage, FixerKind};

/// Library-wide error type for resonite-fixes operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Filesystem operation failed on a specific path.
    #[error("Failed to {action} '{}': {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The per-user data directory could not be determined.
    #[error("Could not determine the user data directory (set XDG_DATA_HOME or HOME)")]
    DataHomeUnavailable,

    /// Installation path is not usable.
    #[error("Invalid installation path '{}': {reason}", .path.display())]
    InvalidInstallation { path: PathBuf, reason: String },

    /// A directory the fixer depends on does not exist.
    #[error("Required directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// A link or file already exists where a new link was to be created.
    #[error("Path already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Source repository clone failed.
    #[error("Failed to clone '{url}': {details}")]
    CloneFailed { url: String, details: String },

    /// Archive download failed.
    #[error("Failed to download '{url}': {details}")]
    DownloadFailed { url: String, details: String, status: Option<u16> },

    /// Build toolchain could not be started.
    #[error("Failed to start '{program}': {details}")]
    ToolchainUnavailable { program: String, details: String },

    /// Build toolchain exited unsuccessfully.
    #[error("Build command '{command}' failed ({status}): {details}")]
    BuildFailed { command: String, status: String, details: String },

    /// Archive could not be parsed or read.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Selected entry is not present in the archive.
    #[error("Archive entry {selector} not found ({entries} entries present)")]
    ArchiveEntryMissing { selector: String, entries: usize },

    /// A fixer failed; carries the fixer and stage.
    #[error(transparent)]
    Fix(Box<FixFailure>),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Filesystem { action, path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Filesystem { source, .. } => source.kind(),
            AppError::Configuration(_) | AppError::InvalidInstallation { .. } => {
                io::ErrorKind::InvalidInput
            }
            AppError::DataHomeUnavailable
            | AppError::MissingDirectory(_)
            | AppError::ArchiveEntryMissing { .. } => io::ErrorKind::NotFound,
            AppError::AlreadyExists(_) => io::ErrorKind::AlreadyExists,
            AppError::ToolchainUnavailable { .. } => io::ErrorKind::NotFound,
            AppError::Archive(_) => io::ErrorKind::InvalidData,
            AppError::CloneFailed { .. }
            | AppError::DownloadFailed { .. }
            | AppError::BuildFailed { .. } => io::ErrorKind::Other,
            AppError::Fix(failure) => failure.source.kind(),
        }
    }
}

/// Typed pipeline failure naming the fixer and stage that failed.
#[derive(Debug, Error)]
#[error("{fixer} failed while {stage}: {source}")]
pub struct FixFailure {
    pub fixer: FixerKind,
    pub stage: FixStage,
    #[source]
    pub source: AppError,
}

impl FixFailure {
    pub fn new(fixer: FixerKind, stage: FixStage, source: AppError) -> Self {
        Self { fixer, stage, source }
    }
}

impl From<FixFailure> for AppError {
    fn from(failure: FixFailure) -> Self {
        AppError::Fix(Box::new(failure))
    }
}

/// Attach fixer and stage context to a fallible step.
pub trait StageContext<T> {
    fn at_stage(self, fixer: FixerKind, stage: FixStage) -> Result<T, FixFailure>;
}

impl<T> StageContext<T> for Result<T, AppError> {
    fn at_stage(self, fixer: FixerKind, stage: FixStage) -> Result<T, FixFailure> {
        self.map_err(|source| FixFailure::new(fixer, stage, source))
    }
}
