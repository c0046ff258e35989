pub mod build;
pub mod preload;
pub mod symlink;

pub use build::BuildOutcome;
pub use preload::PreloadOutcome;
pub use symlink::SymlinkOutcome;
