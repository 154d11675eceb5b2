//! Host derivation from the log file name.

use crate::error::PuzzleError;
use std::path::Path;

/// Derives the image host from a log file named `<prefix>_<host>[_...]`.
///
/// Only the final path component is considered, so directories containing
/// `_` do not interfere. The segment at index 1 of the `_` split must be
/// non-empty and must parse as a URL host.
///
/// # Examples
///
/// - `animal_code.google.com` → `"code.google.com"`
/// - `logs/place_code.google.com_place_logpuzzle` → `"code.google.com"`
pub fn host_from_log_path(path: &Path) -> Result<String, PuzzleError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let segment = file_name
        .split('_')
        .nth(1)
        .filter(|h| !h.is_empty())
        .map(str::to_string);
    let host = match segment {
        Some(h) => h,
        None => return Err(PuzzleError::MissingHost { file_name }),
    };

    let valid = url::Url::parse(&format!("http://{}/", host))
        .map(|u| u.host_str().is_some())
        .unwrap_or(false);
    if !valid {
        return Err(PuzzleError::InvalidHost { file_name, host });
    }

    Ok(host)
}
