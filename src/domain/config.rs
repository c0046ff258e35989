//! Fixed locations, URLs and names the fixers operate on.
//!
//! Every value defaults to what the upstream fixes require; tests substitute
//! their own roots and endpoints.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::AppError;

const BROTLI_REPOSITORY_URL: &str = "https://github.com/shocktail39/resonite-brotli.net.git";
const SUPERPISS_ARCHIVE_URL: &str =
    "https://github.com/Yellow-Dog-Man/Resonite-Issues/files/12900246/bug-69-workaround.zip";
const SCRATCH_DIR_NAME: &str = "resonite-brotli-dotnet-shocktail39";

/// Aggregate configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct FixConfig {
    pub symlink: SymlinkFixConfig,
    pub build: BuildFixConfig,
    pub preload: PreloadFixConfig,
}

impl FixConfig {
    /// Build the default configuration, resolving the user's data home once.
    pub fn resolve() -> Result<Self, AppError> {
        let data_home = dirs::data_dir().ok_or(AppError::DataHomeUnavailable)?;
        Ok(Self::with_data_home(data_home))
    }

    /// Default configuration rooted at an explicit data home.
    pub fn with_data_home(data_home: PathBuf) -> Self {
        Self {
            symlink: SymlinkFixConfig::default(),
            build: BuildFixConfig::default(),
            preload: PreloadFixConfig::new(data_home),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.symlink.validate()?;
        self.build.validate()?;
        self.preload.validate()
    }
}

/// Plugin names for the case-variant link.
#[derive(Debug, Clone)]
pub struct SymlinkFixConfig {
    /// Name the application looks up (wrong case).
    pub link_name: String,
    /// Name of the library actually shipped.
    pub target_name: String,
}

impl Default for SymlinkFixConfig {
    fn default() -> Self {
        Self { link_name: "libFreeimage.so".to_string(), target_name: "libFreeImage.so".to_string() }
    }
}

impl SymlinkFixConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_file_name("symlink.link_name", &self.link_name)?;
        validate_file_name("symlink.target_name", &self.target_name)?;
        if self.link_name == self.target_name {
            return Err(AppError::config_error("symlink.link_name must differ from target_name"));
        }
        Ok(())
    }
}

/// Source, toolchain and artifact layout for the library rebuild.
#[derive(Debug, Clone)]
pub struct BuildFixConfig {
    /// Repository cloned into the scratch workspace.
    pub repository_url: String,
    /// Scratch workspace, wiped on every run.
    pub scratch_dir: PathBuf,
    /// Project directory relative to the clone root.
    pub project_subpath: PathBuf,
    /// Toolchain executable resolved from `PATH`.
    pub toolchain_program: String,
    /// Target framework moniker passed to `publish -f`.
    pub target_framework: String,
    pub build_configuration: String,
    pub primary_library: String,
    pub runtimes_dir: String,
}

impl Default for BuildFixConfig {
    fn default() -> Self {
        Self {
            repository_url: BROTLI_REPOSITORY_URL.to_string(),
            scratch_dir: std::env::temp_dir().join(SCRATCH_DIR_NAME),
            project_subpath: PathBuf::from("Brotli.NET").join("Brotli.Core"),
            toolchain_program: "dotnet".to_string(),
            target_framework: "net462".to_string(),
            build_configuration: "Debug".to_string(),
            primary_library: "Brotli.Core.dll".to_string(),
            runtimes_dir: "runtimes".to_string(),
        }
    }
}

impl BuildFixConfig {
    /// Project directory inside the scratch workspace.
    pub fn project_dir(&self) -> PathBuf {
        self.scratch_dir.join(&self.project_subpath)
    }

    /// Directory the toolchain publishes into.
    pub fn publish_dir(&self) -> PathBuf {
        self.project_dir()
            .join("bin")
            .join(&self.build_configuration)
            .join(&self.target_framework)
            .join("publish")
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.repository_url.trim().is_empty() {
            return Err(AppError::config_error("build.repository_url must not be empty"));
        }
        if !self.scratch_dir.is_absolute() {
            return Err(AppError::config_error(format!(
                "build.scratch_dir must be absolute: {}",
                self.scratch_dir.display()
            )));
        }
        if self.project_subpath.is_absolute() {
            return Err(AppError::config_error("build.project_subpath must be relative"));
        }
        if self.toolchain_program.trim().is_empty() {
            return Err(AppError::config_error("build.toolchain_program must not be empty"));
        }
        validate_file_name("build.target_framework", &self.target_framework)?;
        validate_file_name("build.build_configuration", &self.build_configuration)?;
        validate_file_name("build.primary_library", &self.primary_library)?;
        validate_file_name("build.runtimes_dir", &self.runtimes_dir)
    }
}

/// How the preload library is located inside the downloaded archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveEntrySelector {
    /// Position in the archive's central directory.
    Index(usize),
    /// Exact entry name, including any directory prefix.
    Name(String),
}

impl Default for ArchiveEntrySelector {
    /// The upstream archive ships a directory entry first and the library second.
    fn default() -> Self {
        ArchiveEntrySelector::Index(1)
    }
}

impl fmt::Display for ArchiveEntrySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveEntrySelector::Index(index) => write!(f, "#{}", index),
            ArchiveEntrySelector::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// Download source and storage location for the preload workaround.
#[derive(Debug, Clone)]
pub struct PreloadFixConfig {
    pub archive_url: Url,
    pub entry: ArchiveEntrySelector,
    /// Per-user data home, resolved once at process start.
    pub data_home: PathBuf,
    pub storage_dir_name: String,
    pub library_name: String,
    /// Request timeout; `None` waits indefinitely.
    pub http_timeout: Option<Duration>,
}

impl PreloadFixConfig {
    pub fn new(data_home: PathBuf) -> Self {
        Self {
            archive_url: default_archive_url(),
            entry: ArchiveEntrySelector::default(),
            data_home,
            storage_dir_name: "resonitefixes".to_string(),
            library_name: "superpiss.so".to_string(),
            http_timeout: None,
        }
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.data_home.join(&self.storage_dir_name)
    }

    pub fn library_path(&self) -> PathBuf {
        self.storage_dir().join(&self.library_name)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        match self.archive_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(AppError::config_error(format!(
                    "preload.archive_url must use http or https, got '{}'",
                    other
                )));
            }
        }
        if !self.data_home.is_absolute() {
            return Err(AppError::config_error(format!(
                "preload.data_home must be absolute: {}",
                self.data_home.display()
            )));
        }
        if matches!(&self.entry, ArchiveEntrySelector::Name(name) if name.is_empty()) {
            return Err(AppError::config_error("preload.entry name must not be empty"));
        }
        validate_file_name("preload.storage_dir_name", &self.storage_dir_name)?;
        validate_file_name("preload.library_name", &self.library_name)
    }
}

fn default_archive_url() -> Url {
    Url::parse(SUPERPISS_ARCHIVE_URL).expect("Default archive URL must be valid")
}

fn validate_file_name(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::config_error(format!("{} must not be empty", field)));
    }
    let path = Path::new(value);
    if value == "." || value == ".." || path.components().count() != 1 {
        return Err(AppError::config_error(format!(
            "{} must be a single path component, got '{}'",
            field, value
        )));
    }
    Ok(())
}
