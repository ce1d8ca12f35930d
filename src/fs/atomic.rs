//! Atomic, no-clobber file creation for specdocs.
//!
//! # Implementation Strategy
//!
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Hard-link the temporary file to the target name
//! 4. Remove the temporary name
//!
//! Step 3 fails with `AlreadyExists` when the target is present, so an
//! existing document is never overwritten and a reader never observes a
//! partially written one.
//!
//! # Important Notes
//!
//! - On crash, a temporary file may remain (named `.{filename}.tmp`)
//! - Filesystems without hard-link support fall back to an existence check
//!   followed by `rename()`

use crate::error::{DocgenError, Result};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Atomically create `path` with `content`, refusing to overwrite.
///
/// # Returns
///
/// * `Ok(())` - The file was created with the full content
/// * `Err(DocgenError::IoError)` - The file already exists, or a write failed
pub fn write_new_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        return Err(already_exists(path));
    }

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    let linked = link_into_place(&temp_path, path);
    let _ = fs::remove_file(&temp_path);
    linked?;

    // Persist the new directory entry.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

fn already_exists(path: &Path) -> DocgenError {
    DocgenError::IoError(format!(
        "refusing to overwrite existing file '{}'",
        path.display()
    ))
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            DocgenError::IoError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        DocgenError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        DocgenError::IoError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        DocgenError::IoError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

/// Give the synced temporary file its final name without replacing anything.
fn link_into_place(temp_path: &Path, target: &Path) -> Result<()> {
    match fs::hard_link(temp_path, target) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(already_exists(target)),
        Err(link_err) => {
            if target.exists() {
                return Err(already_exists(target));
            }
            // A successful rename consumes the temp file.
            fs::rename(temp_path, target).map_err(|e| {
                DocgenError::IoError(format!(
                    "failed to create '{}': {} (hard link failed: {})",
                    target.display(),
                    e,
                    link_err
                ))
            })
        }
    }
}
