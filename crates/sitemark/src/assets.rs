//! Static asset copying

use std::fs;
use std::path::Path;

use crate::{io_error, Result};

/// Replace `public_dir` with a fresh copy of `static_dir`.
///
/// Anything already in `public_dir` is deleted first. A missing
/// `static_dir` leaves an empty `public_dir`. Returns the number of files
/// copied.
pub fn copy_static(static_dir: &Path, public_dir: &Path) -> Result<usize> {
    if public_dir.exists() {
        tracing::debug!(dir = %public_dir.display(), "removing previous output");
        fs::remove_dir_all(public_dir).map_err(io_error(public_dir))?;
    }
    fs::create_dir_all(public_dir).map_err(io_error(public_dir))?;

    if !static_dir.is_dir() {
        tracing::warn!(dir = %static_dir.display(), "static directory not found, nothing to copy");
        return Ok(0);
    }

    copy_recursive(static_dir, public_dir)
}

fn copy_recursive(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;

    let mut entries = fs::read_dir(src)
        .map_err(io_error(src))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(io_error(src))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path).map_err(io_error(&dst_path))?;
            tracing::debug!(dir = %dst_path.display(), "created directory");
            copied += copy_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path).map_err(io_error(&src_path))?;
            tracing::info!(file = %dst_path.display(), "copied file");
            copied += 1;
        }
    }

    Ok(copied)
}
