//! Puzzle URL extraction from Apache access logs.
//!
//! The host is taken from the log file name, each line contributes at most
//! one puzzle fragment, and the result is deduplicated and ordered by the
//! suffix code (see [`order::sort_key`]).

mod host;
mod order;
mod pattern;

pub use host::host_from_log_path;
pub use order::{order_urls, sort_key, MIN_KEYED_LEN};
pub use pattern::find_puzzle_fragment;

use crate::error::PuzzleError;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Builds the ordered, deduplicated puzzle URL list from already-read lines.
pub fn extract_urls<'a, I>(host: &str, lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let unique: BTreeSet<String> = lines
        .into_iter()
        .filter_map(find_puzzle_fragment)
        .map(|fragment| format!("http://{}{}", host, fragment))
        .collect();
    let mut urls: Vec<String> = unique.into_iter().collect();
    order_urls(&mut urls);
    urls
}

/// Returns the puzzle URLs from the log file at `path`, deduplicated and
/// sorted by suffix code.
///
/// The host comes from the file name (see [`host_from_log_path`]) and is
/// checked before the file is opened. Lines that are not valid UTF-8 are
/// decoded lossily.
pub fn read_urls(path: &Path) -> Result<Vec<String>, PuzzleError> {
    let host = host_from_log_path(path)?;
    tracing::debug!(host = %host, path = %path.display(), "derived host from log file name");

    let data = fs::read(path).map_err(|source| PuzzleError::ReadLog {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<Cow<'_, str>> = data
        .split(|b| *b == b'\n')
        .map(String::from_utf8_lossy)
        .collect();

    let urls = extract_urls(&host, lines.iter().map(|l| l.as_ref()));
    tracing::info!(lines = lines.len(), urls = urls.len(), "extracted puzzle urls");
    Ok(urls)
}
