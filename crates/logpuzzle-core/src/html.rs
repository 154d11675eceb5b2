//! Index page listing the downloaded images in order.

use crate::error::PuzzleError;
use std::fs;
use std::path::Path;

/// One `<img>` tag; `src` is used verbatim, with no escaping.
pub fn image_tag(src: &str) -> String {
    format!("<img src=\"{}\">", src)
}

/// Wraps the concatenated image tags in the fixed page template.
pub fn render_index(image_tags: &str) -> String {
    format!(
        "\n        <html>\n            <body>\n                {}\n            </body>\n        </html>\n    ",
        image_tags
    )
}

/// Writes the index page to `path`, replacing any previous file.
pub fn write_index(path: &Path, image_tags: &str) -> Result<(), PuzzleError> {
    fs::write(path, render_index(image_tags)).map_err(|source| PuzzleError::WriteIndex {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote index page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_not_escaped() {
        assert_eq!(image_tag("out dir/img0.jpg"), "<img src=\"out dir/img0.jpg\">");
    }

    #[test]
    fn page_wraps_tags_in_body() {
        let page = render_index("<img src=\"d/img0.jpg\"><img src=\"d/img1.jpg\">");
        let body_start = page.find("<body>").unwrap();
        let body_end = page.find("</body>").unwrap();
        let body = &page[body_start..body_end];
        assert!(body.contains("<img src=\"d/img0.jpg\"><img src=\"d/img1.jpg\">"));
        assert!(page.trim_start().starts_with("<html>"));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn write_index_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "stale").unwrap();
        write_index(&path, &image_tag("x/img0.jpg")).unwrap();
        let page = fs::read_to_string(&path).unwrap();
        assert!(!page.contains("stale"));
        assert_eq!(page.matches("<img ").count(), 1);
    }
}
