//! `logpuzzle --todir DESTDIR LOGFILE` – download the puzzle images and write index.html.

use anyhow::Result;
use logpuzzle_core::config::PuzzleConfig;
use logpuzzle_core::extract::read_urls;
use logpuzzle_core::materialize::download_images;
use std::path::Path;

/// Index page name, written relative to the current working directory.
pub const INDEX_FILE: &str = "index.html";

pub fn run_download(logfile: &Path, dest_dir: &Path, cfg: &PuzzleConfig) -> Result<()> {
    let urls = read_urls(logfile)?;
    let report = download_images(&urls, dest_dir, Path::new(INDEX_FILE), &cfg.http)?;
    tracing::info!(
        "downloaded {} image(s), {} bytes, index at {}",
        report.images.len(),
        report.bytes,
        report.index_path.display()
    );
    Ok(())
}
