//! Destination directory creation.

use crate::error::PuzzleError;
use std::fs;
use std::path::Path;

/// Ensures `path` exists as a directory, creating missing parents.
///
/// An existing directory is a no-op. On failure a diagnostic naming the path
/// is printed to stderr and logged, and `Err` is returned; callers that treat
/// this as non-fatal may ignore it.
pub fn create_dir(path: &Path) -> Result<(), PuzzleError> {
    if path.is_dir() {
        return Ok(());
    }
    match fs::create_dir_all(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "created destination directory");
            Ok(())
        }
        Err(source) => {
            eprintln!("Creation of directory {} failed", path.display());
            tracing::warn!(path = %path.display(), "directory creation failed: {}", source);
            Err(PuzzleError::CreateDir {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
