use std::fmt;

/// Identifies one remediation step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixerKind {
    /// Case-variant symlink for the FreeImage plugin.
    Symlink,
    /// Brotli.Core rebuild and install.
    Build,
    /// sRGB texture preload workaround.
    Preload,
}

impl FixerKind {
    /// All fixers in pipeline order.
    pub const ALL: [FixerKind; 3] = [FixerKind::Symlink, FixerKind::Build, FixerKind::Preload];

    /// Banner shown to the operator before the fixer starts.
    pub fn banner(&self) -> &'static str {
        match self {
            FixerKind::Symlink => "Creating symbolic link for libFreeImage",
            FixerKind::Build => "Building and replacing Brotli dlls",
            FixerKind::Preload => "Provisioning Superpiss workaround",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FixerKind::Symlink => "symlink",
            FixerKind::Build => "build",
            FixerKind::Preload => "preload",
        }
    }
}

impl fmt::Display for FixerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fixer", self.as_str())
    }
}

/// The stage a fixer was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixStage {
    LinkPlugin,
    ResetWorkspace,
    FetchSource,
    Build,
    InstallLibrary,
    InstallRuntimes,
    Download,
    OpenArchive,
    ExtractEntry,
    PrepareDirectory,
    WriteLibrary,
}

impl FixStage {
    pub fn description(&self) -> &'static str {
        match self {
            FixStage::LinkPlugin => "linking plugin",
            FixStage::ResetWorkspace => "resetting scratch workspace",
            FixStage::FetchSource => "fetching source",
            FixStage::Build => "building",
            FixStage::InstallLibrary => "installing library",
            FixStage::InstallRuntimes => "installing runtimes",
            FixStage::Download => "downloading archive",
            FixStage::OpenArchive => "opening archive",
            FixStage::ExtractEntry => "extracting archive entry",
            FixStage::PrepareDirectory => "preparing storage directory",
            FixStage::WriteLibrary => "writing preload library",
        }
    }
}

impl fmt::Display for FixStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
