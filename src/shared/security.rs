//! File-safety checks shared by the filesystem adapters.
//!
//! Inputs are inspected with `symlink_metadata()` so a link is seen as a
//! link, never as its target.

use crate::shared::error::DepImpactError;
use std::fs;
use std::path::Path;

/// Largest manifest or lockfile accepted (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

const SYMLINK_HINT: &str = "Pass the real file path instead of a symbolic link.";

fn symlink_rejected(path: &Path) -> DepImpactError {
    DepImpactError::SecurityError {
        path: path.to_path_buf(),
        reason: "path is a symbolic link".to_string(),
        hint: SYMLINK_HINT.to_string(),
    }
}

fn read_failed(path: &Path, details: String) -> DepImpactError {
    DepImpactError::FileReadError {
        path: path.to_path_buf(),
        details,
    }
}

/// Rejects an existing symbolic link at `path`
///
/// A path that does not exist yet passes, so writers can create it.
pub fn ensure_not_symlink(path: &Path) -> Result<(), DepImpactError> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(symlink_rejected(path)),
        _ => Ok(()),
    }
}

/// Rejects sizes above `limit`
pub fn ensure_within_size(path: &Path, size: u64, limit: u64) -> Result<(), DepImpactError> {
    if size > limit {
        return Err(DepImpactError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("file is {} bytes, the limit is {} bytes", size, limit),
            hint: "Check that the path points at a package.json or package-lock.json.".to_string(),
        });
    }
    Ok(())
}

/// Reads an input file as UTF-8 text
///
/// # Arguments
/// * `path` - File to read
/// * `description` - Name used in messages, e.g. "package.json" or "lockfile"
///
/// # Errors
/// - `SecurityError` for a symbolic link or an oversized file
/// - `FileReadError` when the path is not a regular file or cannot be read
pub fn read_input_file(path: &Path, description: &str) -> Result<String, DepImpactError> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| read_failed(path, format!("cannot inspect {}: {}", description, e)))?;

    if metadata.is_symlink() {
        return Err(symlink_rejected(path));
    }
    if !metadata.is_file() {
        return Err(read_failed(
            path,
            format!("{} is not a regular file", path.display()),
        ));
    }
    ensure_within_size(path, metadata.len(), MAX_FILE_SIZE)?;

    fs::read_to_string(path).map_err(|e| read_failed(path, format!("{}: {}", description, e)))
}
