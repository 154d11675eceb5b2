//! Single-URL HTTP GET into an image file.
//!
//! Uses one libcurl `Easy` handle per image, with no retries.

use crate::config::HttpOptions;
use crate::error::PuzzleError;
use crate::storage::ImageWriter;
use std::path::Path;
use std::time::Duration;

fn curl_err(url: &str) -> impl Fn(curl::Error) -> PuzzleError + '_ {
    move |source| PuzzleError::Download {
        url: url.to_string(),
        source,
    }
}

/// Downloads `url` to `dest`, overwriting any existing file. Returns the number of bytes written.
///
/// Follows redirects. A non-2xx final status is an error and leaves `dest` untouched.
pub fn fetch_to_file(url: &str, dest: &Path, http: &HttpOptions) -> Result<u64, PuzzleError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err(url))?;
    easy.follow_location(true).map_err(curl_err(url))?;
    easy.max_redirections(http.max_redirections)
        .map_err(curl_err(url))?;
    if let Some(secs) = http.connect_timeout_secs {
        easy.connect_timeout(Duration::from_secs(secs))
            .map_err(curl_err(url))?;
    }
    if let Some(secs) = http.timeout_secs {
        easy.timeout(Duration::from_secs(secs)).map_err(curl_err(url))?;
    }
    if let Some(ua) = &http.user_agent {
        easy.useragent(ua).map_err(curl_err(url))?;
    }

    let mut writer = ImageWriter::create(dest)?;
    let mut write_failure: Option<PuzzleError> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match writer.write_chunk(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_failure = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(curl_err(url))?;
        transfer.perform()
    };

    if let Some(e) = write_failure {
        discard(&writer);
        return Err(e);
    }
    if let Err(source) = performed {
        discard(&writer);
        return Err(curl_err(url)(source));
    }

    let code = easy.response_code().map_err(curl_err(url))?;
    if !(200..300).contains(&code) {
        discard(&writer);
        return Err(PuzzleError::Http {
            url: url.to_string(),
            code,
        });
    }

    writer.finalize()
}

fn discard(writer: &ImageWriter) {
    if let Err(e) = std::fs::remove_file(writer.temp_path()) {
        tracing::debug!(path = %writer.temp_path().display(), "could not remove temp file: {}", e);
    }
}
