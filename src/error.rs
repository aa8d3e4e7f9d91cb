// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that end a run. A label or heading missing from the page is
/// *not* one of these; scraping degrades to "Unknown" instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("HTTP error: {status} {url}")]
    HttpStatus { status: u16, url: String },

    #[error("failed reading response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { action, path, source }
    }
}
