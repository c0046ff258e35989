pub mod config;
pub mod error;
pub mod fixer;
pub mod installation;

pub use config::{
    ArchiveEntrySelector, BuildFixConfig, FixConfig, PreloadFixConfig, SymlinkFixConfig,
};
pub use error::{AppError, FixFailure, StageContext};
pub use fixer::{FixStage, FixerKind};
pub use installation::InstallationPath;
