use async_trait::async_trait;

use super::Result;

/// Transport that reads raw static documents.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Reads the body at `path` (relative to the source's base URL).
    ///
    /// Implementations return [`super::FetchError::Status`] for non-2xx
    /// responses and [`super::FetchError::Network`] for transport failures.
    async fn get(&self, path: &str) -> Result<Vec<u8>>;

    /// Full location of `path`, used in error messages.
    fn locate(&self, path: &str) -> String {
        path.to_string()
    }
}
