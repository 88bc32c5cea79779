//! Copy, clear, and write primitives over the state tree.

use crate::error::Result;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Return `filename` unchanged if absolute, else join it under
/// `data_dir`.
pub fn abs_path(data_dir: &Path, filename: impl AsRef<Path>) -> PathBuf {
    let filename = filename.as_ref();
    if filename.is_absolute() {
        filename.to_path_buf()
    } else {
        data_dir.join(filename)
    }
}

/// Copy a regular file or a directory tree from `src` to `dst`.
///
/// Directories go through a staging copy: the tree is copied into a
/// fresh temporary directory first, then from there into `dst`.
/// Routing through the intermediate keeps the recursive walk from
/// reading its own output when `dst` is nested inside `src` (or vice
/// versa). The staging directory is removed when the copy returns.
///
/// # Errors
/// Fail-fast on the first IO error; partially copied output is left in
/// place.
pub fn copy(src: &Path, dst: &Path) -> Result<()> {
    let meta = fs::metadata(src)?;

    if meta.is_dir() {
        let staging = tempfile::Builder::new().prefix("hearth-copy").tempdir()?;
        copy_dir(src, staging.path())?;
        copy_dir(staging.path(), dst)?;
        debug!(src = %src.display(), dst = %dst.display(), "Copied directory tree");
        return Ok(());
    }

    copy_file(src, dst)
}

/// Recursive directory copy. Assumes `src` is a directory; directory
/// permission bits are carried over from source at each level.
fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    let meta = fs::metadata(src)?;
    fs::create_dir_all(dst)?;
    fs::set_permissions(dst, meta.permissions())?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir(&from, &to)?;
        } else {
            copy_file(&from, &to)?;
        }
    }

    Ok(())
}

/// Byte-for-byte file copy. `dst` may be left truncated or partial on
/// error.
fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let mut reader = File::open(src)?;
    let mut writer = File::create(dst)?;
    io::copy(&mut reader, &mut writer)?;
    Ok(())
}

/// Remove every entry directly under `dir`, leaving `dir` itself in
/// place. Subdirectories are removed with everything beneath them.
///
/// # Errors
/// Aborts on the first error; the directory may be partially cleared.
pub fn clear_dir(dir: &Path) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }

    debug!(dir = %dir.display(), "Cleared directory");

    Ok(())
}

/// Write `content` to `path`, creating missing parent directories
/// first. An existing file is truncated.
///
/// # Errors
/// Returns the first underlying IO error.
pub fn write_file(content: impl AsRef<[u8]>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
