use thiserror::Error;

/// Errors that can occur during persistent store operations.
///
/// The freshness cache never surfaces these to its callers; they are logged
/// and the cache carries on with its memory tier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Store quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("Store operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
