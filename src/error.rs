//! Error types for title and favicon lookups.

use thiserror::Error;

pub type Result<T, E = ResolveError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("required element not found: {0}")]
    ElementNotFound(String),

    #[error("element is missing required data: {0}")]
    DataNotFound(String),

    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to start WebDriver session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("failed to write favicon: {0}")]
    Io(#[from] std::io::Error),

    #[error("favicon payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
