use async_trait::async_trait;

use super::Result;

/// Device-local key-value store backing the persistent cache tier.
#[async_trait]
pub trait Store: Send + Sync {
    /// Gets a value by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value, overwriting any previous one.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Deletes a value. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Lists every key currently held.
    async fn keys(&self) -> Result<Vec<String>>;
}
