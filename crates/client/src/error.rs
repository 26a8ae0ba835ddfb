//! Client error types.

use thiserror::Error;

/// Result type alias for client setup.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while setting up the client.
///
/// Content fetch failures are reported as [`folio_core::fetch::FetchError`]
/// so callers can inspect their status and code.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP client setup failed: {0}")]
    Setup(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
