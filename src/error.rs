//! Error types for folio operations.

use thiserror::Error;

/// Errors that can occur during report layout or document export.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Invalid report JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image fetch failed: {0}")]
    ImageFetch(String),

    #[error("Unsupported image data for {0}")]
    UnsupportedImage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
