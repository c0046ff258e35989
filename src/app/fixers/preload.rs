//! sRGB texture preload workaround.
//!
//! On NVidia drivers sRGB textures fail to load because of an invalid format
//! argument passed to `glTexSubImage2D()`. A community-built preload library
//! intercepts the call; this fixer downloads it and tells the operator how to
//! enable it with `LD_PRELOAD`.

use std::io::{Cursor, Read};
use std::path::PathBuf;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::domain::{
    AppError, ArchiveEntrySelector, FixFailure, FixStage, FixerKind, PreloadFixConfig,
    StageContext,
};
use crate::ports::{ArchiveDownloader, Reporter};
use crate::services::filesystem;

const FIXER: FixerKind = FixerKind::Preload;

/// Location of the installed preload library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadOutcome {
    pub library_path: PathBuf,
}

impl PreloadOutcome {
    /// Launch-option instruction for the operator.
    pub fn guidance(&self) -> String {
        format!(
            "If you use Nvidia and you have issues launching, set this as your launch option: LD_PRELOAD={} %command%",
            self.library_path.display()
        )
    }
}

/// Download the archive, extract the selected entry and store it under the data home.
pub fn execute<D, R>(
    config: &PreloadFixConfig,
    downloader: &D,
    reporter: &R,
) -> Result<PreloadOutcome, FixFailure>
where
    D: ArchiveDownloader,
    R: Reporter,
{
    let archive = downloader.download(&config.archive_url).at_stage(FIXER, FixStage::Download)?;
    let contents = extract_entry(&archive, &config.entry)?;

    let storage_dir = config.storage_dir();
    filesystem::ensure_dir_restricted(&storage_dir).at_stage(FIXER, FixStage::PrepareDirectory)?;

    let library_path = config.library_path();
    filesystem::write_restricted(&library_path, &contents).at_stage(FIXER, FixStage::WriteLibrary)?;
    tracing::info!(path = %library_path.display(), bytes = contents.len(), "preload library written");

    let outcome = PreloadOutcome { library_path };
    reporter.guidance(&outcome.guidance());
    Ok(outcome)
}

/// Read one entry of an in-memory zip archive.
///
/// No content validation is done; an index selector picks whatever sits at
/// that position in the central directory.
pub fn extract_entry(
    archive: &[u8],
    selector: &ArchiveEntrySelector,
) -> Result<Vec<u8>, FixFailure> {
    let mut archive = ZipArchive::new(Cursor::new(archive))
        .map_err(AppError::from)
        .at_stage(FIXER, FixStage::OpenArchive)?;
    let entries = archive.len();

    let lookup = match selector {
        ArchiveEntrySelector::Index(index) => archive.by_index(*index),
        ArchiveEntrySelector::Name(name) => archive.by_name(name),
    };
    let mut entry = match lookup {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(FixFailure::new(
                FIXER,
                FixStage::ExtractEntry,
                AppError::ArchiveEntryMissing { selector: selector.to_string(), entries },
            ));
        }
        Err(e) => return Err(FixFailure::new(FIXER, FixStage::ExtractEntry, e.into())),
    };
    tracing::debug!(name = entry.name(), size = entry.size(), "extracting archive entry");

    let mut contents = Vec::new();
    entry
        .read_to_end(&mut contents)
        .map_err(|e| AppError::Archive(ZipError::Io(e)))
        .at_stage(FIXER, FixStage::ExtractEntry)?;

    Ok(contents)
}
