use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error code carried by every [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The server answered with a non-2xx status.
    FetchError,
    /// Transport failure, timeout, or an undecodable body.
    NetworkError,
    /// A required identifier was missing.
    InvalidId,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::FetchError => "FETCH_ERROR",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::InvalidId => "INVALID_ID",
        }
    }
}

/// Errors that can occur while fetching a static document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Failed to fetch data from {url} (HTTP {status})")]
    Status { url: String, status: u16 },

    #[error("Network error while fetching {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("Blog post ID is required")]
    InvalidId,
}

impl FetchError {
    /// HTTP status associated with the failure. Transport-level failures
    /// report 0.
    pub fn status(&self) -> u16 {
        match self {
            FetchError::Status { status, .. } => *status,
            FetchError::Network { .. } => 0,
            FetchError::InvalidId => 400,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FetchError::Status { .. } => ErrorCode::FetchError,
            FetchError::Network { .. } => ErrorCode::NetworkError,
            FetchError::InvalidId => ErrorCode::InvalidId,
        }
    }
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
