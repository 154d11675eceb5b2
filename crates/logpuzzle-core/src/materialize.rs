//! Downloads the ordered puzzle images and writes the index page.

use crate::config::HttpOptions;
use crate::dirs::create_dir;
use crate::error::PuzzleError;
use crate::fetch::fetch_to_file;
use crate::html::{image_tag, write_index};
use std::path::{Path, PathBuf};

/// Outcome of a successful materialization.
#[derive(Debug, Clone)]
pub struct MaterializeReport {
    /// Image paths in list order (`<dest_dir>/img<N>.jpg`).
    pub images: Vec<PathBuf>,
    /// Where the index page was written.
    pub index_path: PathBuf,
    /// Total bytes downloaded.
    pub bytes: u64,
}

/// File name of the image at `index`.
pub fn image_name(index: usize) -> String {
    format!("img{}.jpg", index)
}

/// Filesystem path of the image at `index`; keeps non-UTF-8 `dest_dir` bytes intact.
pub fn image_file(dest_dir: &Path, index: usize) -> PathBuf {
    dest_dir.join(image_name(index))
}

/// `src` string for the image at `index`, exactly as referenced from the page.
pub fn image_src(dest_dir: &Path, index: usize) -> String {
    format!("{}/{}", dest_dir.display(), image_name(index))
}

/// Downloads `urls` in order into `dest_dir` as `img0.jpg`, `img1.jpg`, ...
/// and then writes an index page at `index_path` with one `<img>` per file.
///
/// A failure to create `dest_dir` is reported but not fatal; the downloads
/// then fail on their own if the directory is unusable. The first download
/// error aborts the run, and in that case no index page is written.
///
/// An empty `dest_dir` is rejected with [`PuzzleError::EmptyDestDir`]
/// before anything is touched.
pub fn download_images(
    urls: &[String],
    dest_dir: &Path,
    index_path: &Path,
    http: &HttpOptions,
) -> Result<MaterializeReport, PuzzleError> {
    if dest_dir.as_os_str().is_empty() {
        return Err(PuzzleError::EmptyDestDir);
    }
    let _ = create_dir(dest_dir);

    let mut images = Vec::with_capacity(urls.len());
    let mut image_tags = String::new();
    let mut bytes = 0u64;

    for (idx, url) in urls.iter().enumerate() {
        let local = image_file(dest_dir, idx);
        tracing::debug!(url = %url, path = %local.display(), "downloading image {}/{}", idx + 1, urls.len());
        let n = fetch_to_file(url, &local, http)?;
        tracing::info!(url = %url, path = %local.display(), bytes = n, "downloaded image");
        image_tags.push_str(&image_tag(&image_src(dest_dir, idx)));
        images.push(local);
        bytes += n;
    }

    write_index(index_path, &image_tags)?;

    Ok(MaterializeReport {
        images,
        index_path: index_path.to_path_buf(),
        bytes,
    })
}
