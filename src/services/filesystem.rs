//! Filesystem helpers shared by the fixers.

use std::fs::{self, DirBuilder, OpenOptions, Permissions};
use std::io::{self, Write};
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt, PermissionsExt, symlink};
use std::path::Path;

use crate::domain::AppError;

/// Owner rwx, group r-x, others nothing.
pub const RESTRICTED_MODE: u32 = 0o750;

/// Remove whatever is at `dir` if present, then recreate it as an empty directory.
pub fn reset_dir(dir: &Path) -> Result<(), AppError> {
    if remove_existing(dir)? {
        tracing::debug!(path = %dir.display(), "removed stale workspace");
    }

    fs::create_dir_all(dir).map_err(|e| AppError::filesystem("create", dir, e))
}

/// Create `dir` (and parents) with restricted permissions; an existing directory is fine.
pub fn ensure_dir_restricted(dir: &Path) -> Result<(), AppError> {
    DirBuilder::new()
        .recursive(true)
        .mode(RESTRICTED_MODE)
        .create(dir)
        .map_err(|e| AppError::filesystem("create", dir, e))
}

/// Write `contents` to `path`, truncating any existing file, and force restricted permissions.
pub fn write_restricted(path: &Path, contents: &[u8]) -> Result<(), AppError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(RESTRICTED_MODE)
        .open(path)
        .map_err(|e| AppError::filesystem("open", path, e))?;

    file.write_all(contents).map_err(|e| AppError::filesystem("write", path, e))?;

    // `mode` only applies on creation.
    file.set_permissions(Permissions::from_mode(RESTRICTED_MODE))
        .map_err(|e| AppError::filesystem("set permissions on", path, e))
}

/// Copy the tree at `src` into `dst`.
///
/// Files already present at the destination are overwritten; files that only
/// exist at the destination are kept. Symlinks are recreated, not followed.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<u64, AppError> {
    let mut copied = 0;
    copy_tree_inner(src, dst, &mut copied)?;
    Ok(copied)
}

fn copy_tree_inner(src: &Path, dst: &Path, copied: &mut u64) -> Result<(), AppError> {
    remove_if_symlink(dst)?;
    fs::create_dir_all(dst).map_err(|e| AppError::filesystem("create", dst, e))?;

    let entries = fs::read_dir(src).map_err(|e| AppError::filesystem("read", src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| AppError::filesystem("read", src, e))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        let file_type =
            entry.file_type().map_err(|e| AppError::filesystem("inspect", &src_path, e))?;

        if file_type.is_dir() {
            copy_tree_inner(&src_path, &dst_path, copied)?;
        } else if file_type.is_symlink() {
            let target =
                fs::read_link(&src_path).map_err(|e| AppError::filesystem("read", &src_path, e))?;
            remove_existing(&dst_path)?;
            symlink(&target, &dst_path).map_err(|e| AppError::filesystem("link", &dst_path, e))?;
            *copied += 1;
        } else {
            remove_if_symlink(&dst_path)?;
            fs::copy(&src_path, &dst_path).map_err(|e| AppError::filesystem("copy", &src_path, e))?;
            *copied += 1;
        }
    }

    Ok(())
}

/// Remove a file, symlink or directory tree at `path`. Returns `false` when nothing was there.
fn remove_existing(path: &Path) -> Result<bool, AppError> {
    let removed = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(AppError::filesystem("inspect", path, err)),
    };
    removed.map(|()| true).map_err(|e| AppError::filesystem("remove", path, e))
}

// Writing into a symlinked file or directory would escape the destination tree.
fn remove_if_symlink(path: &Path) -> Result<(), AppError> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::remove_file(path).map_err(|e| AppError::filesystem("remove", path, e))
        }
        _ => Ok(()),
    }
}
