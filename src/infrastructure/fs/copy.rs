//! Recursive directory copy
//!
//! Used to seed a workspace with pre-fetched dependency directories.
//! Existing files at the destination are overwritten. A symlink already at
//! the destination (for example one committed in the extracted revision) is
//! removed first and never written through.

use std::fs;
use std::io;
use std::path::Path;

/// Copy `src` into `dst` recursively, creating `dst` if needed.
///
/// Symlinks are recreated as symlinks on unix (vendored gem trees use them)
/// and followed elsewhere. Returns the number of files copied.
pub fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<usize> {
    let meta = fs::metadata(src)?;
    if !meta.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a directory", src.display()),
        ));
    }

    unlink_if_symlink(dst)?;
    fs::create_dir_all(dst)?;
    let mut copied = 0;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_symlink() {
            copied += copy_symlink(&from, &to)?;
        } else if file_type.is_dir() {
            copied += copy_dir_all(&from, &to)?;
        } else {
            unlink_if_symlink(&to)?;
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Remove `path` if it is a symlink, leaving its target alone.
///
/// Returns whether a link was removed.
pub fn unlink_if_symlink(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            remove_link(path)?;
            Ok(true)
        }
        Ok(_) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(not(windows))]
fn remove_link(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

// Directory symlinks on windows are removed as directories.
#[cfg(windows)]
fn remove_link(path: &Path) -> io::Result<()> {
    fs::remove_file(path).or_else(|_| fs::remove_dir(path))
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<usize> {
    let target = fs::read_link(from)?;
    if !unlink_if_symlink(to)? {
        match fs::symlink_metadata(to) {
            Ok(existing) if existing.is_dir() => fs::remove_dir_all(to)?,
            Ok(_) => fs::remove_file(to)?,
            Err(_) => {}
        }
    }
    std::os::unix::fs::symlink(target, to)?;
    Ok(1)
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<usize> {
    if from.is_dir() {
        copy_dir_all(from, to)
    } else {
        unlink_if_symlink(to)?;
        fs::copy(from, to)?;
        Ok(1)
    }
}
