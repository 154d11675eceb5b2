//! Image file lifecycle: write to `<name>.part`, then rename into place.
//!
//! The rename replaces any existing file of the final name, so a re-run
//! overwrites earlier images.

use crate::error::PuzzleError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `img0.jpg` → `img0.jpg.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Sequential writer for one downloaded image.
pub struct ImageWriter {
    file: File,
    temp_path: PathBuf,
    final_path: PathBuf,
    written: u64,
}

impl ImageWriter {
    /// Create (truncating) the temp file for `final_path`.
    pub fn create(final_path: &Path) -> Result<Self, PuzzleError> {
        let temp_path = temp_path(final_path);
        let file = File::create(&temp_path).map_err(|source| PuzzleError::Storage {
            path: temp_path.clone(),
            source,
        })?;
        Ok(Self {
            file,
            temp_path,
            final_path: final_path.to_path_buf(),
            written: 0,
        })
    }

    /// Append `data` to the temp file.
    pub fn write_chunk(&mut self, data: &[u8]) -> Result<(), PuzzleError> {
        self.file
            .write_all(data)
            .map_err(|source| PuzzleError::Storage {
                path: self.temp_path.clone(),
                source,
            })?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Path to the current temp file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Flush and rename the temp file to the final path. Returns bytes written.
    pub fn finalize(mut self) -> Result<u64, PuzzleError> {
        self.file.flush().map_err(|source| PuzzleError::Storage {
            path: self.temp_path.clone(),
            source,
        })?;
        drop(self.file);
        std::fs::rename(&self.temp_path, &self.final_path).map_err(|source| {
            PuzzleError::Storage {
                path: self.final_path.clone(),
                source,
            }
        })?;
        Ok(self.written)
    }
}
