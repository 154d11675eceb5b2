//! Error type shared by extraction and materialization.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while extracting puzzle URLs or materializing their images.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The log file could not be opened or read.
    #[error("failed to read log file {}", path.display())]
    ReadLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file name does not follow `<prefix>_<host>[_...]`.
    #[error(
        "cannot derive host from log file name {file_name:?}: expected `<prefix>_<host>[_...]`"
    )]
    MissingHost { file_name: String },

    /// The segment taken from the file name is not usable as a URL host.
    #[error("log file name {file_name:?} yields invalid host {host:?}")]
    InvalidHost { file_name: String, host: String },

    /// An empty destination would place images at the filesystem root.
    #[error("destination directory is empty")]
    EmptyDestDir,

    /// The destination directory could not be created.
    #[error("creation of directory {} failed", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// curl reported an error (bad URL, connection, timeout, ...).
    #[error("GET {url} failed")]
    Download {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },

    /// Writing or finalizing a downloaded image failed.
    #[error("failed to store image at {}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTML index page could not be written.
    #[error("failed to write index page {}", path.display())]
    WriteIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_host_names_file_and_convention() {
        let e = PuzzleError::MissingHost {
            file_name: "access.log".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("access.log"));
        assert!(msg.contains("<prefix>_<host>"));
    }

    #[test]
    fn create_dir_message_matches_diagnostic() {
        let e = PuzzleError::CreateDir {
            path: PathBuf::from("/nope/out"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(e.to_string(), "creation of directory /nope/out failed");
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn http_message() {
        let e = PuzzleError::Http {
            url: "http://example.com/a.jpg".to_string(),
            code: 404,
        };
        assert_eq!(e.to_string(), "GET http://example.com/a.jpg returned HTTP 404");
    }
}
