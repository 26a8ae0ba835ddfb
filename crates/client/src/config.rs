use std::{env, path::PathBuf, time::Duration};

use crate::error::{ClientError, Result};

/// Default base URL of the static content documents.
pub const DEFAULT_DATA_BASE_URL: &str = "http://localhost:3000/data";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL the document paths are appended to (default: "http://localhost:3000/data")
    pub data_base_url: String,
    /// Request timeout in seconds (default: 10)
    pub fetch_timeout_seconds: u64,
    /// Directory of the persistent cache tier (default: none, memory only)
    pub cache_dir: Option<PathBuf>,
    /// Maximum number of documents held in memory (default: 256)
    pub cache_max_entries: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FOLIO_DATA_BASE_URL` - Base URL of the documents (default: "http://localhost:3000/data")
    /// - `FOLIO_FETCH_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    /// - `FOLIO_CACHE_DIR` - Persistent cache directory (default: unset)
    /// - `FOLIO_CACHE_MAX_ENTRIES` - Memory tier capacity (default: 256)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_base_url: lookup("FOLIO_DATA_BASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATA_BASE_URL.to_string()),
            fetch_timeout_seconds: lookup("FOLIO_FETCH_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            cache_dir: lookup("FOLIO_CACHE_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            cache_max_entries: lookup("FOLIO_CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(256),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    /// Checks the values that would otherwise fail later and less clearly.
    pub fn validate(&self) -> Result<()> {
        if !(self.data_base_url.starts_with("http://") || self.data_base_url.starts_with("https://"))
        {
            return Err(ClientError::Config(format!(
                "data base URL must be absolute http(s), got {:?}",
                self.data_base_url
            )));
        }
        if self.fetch_timeout_seconds == 0 {
            return Err(ClientError::Config(
                "fetch timeout must be at least one second".to_string(),
            ));
        }
        if self.cache_max_entries == 0 {
            return Err(ClientError::Config(
                "cache must hold at least one entry".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.data_base_url, "http://localhost:3000/data");
        assert_eq!(config.fetch_timeout_seconds, 10);
        assert_eq!(config.cache_dir, None);
        assert_eq!(config.cache_max_entries, 256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("FOLIO_DATA_BASE_URL", "https://cdn.example.com/content"),
            ("FOLIO_FETCH_TIMEOUT_SECS", "15"),
            ("FOLIO_CACHE_DIR", "/tmp/folio"),
            ("FOLIO_CACHE_MAX_ENTRIES", "32"),
        ]));

        assert_eq!(config.data_base_url, "https://cdn.example.com/content");
        assert_eq!(config.fetch_timeout(), Duration::from_secs(15));
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/folio")));
        assert_eq!(config.cache_max_entries, 32);
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("FOLIO_FETCH_TIMEOUT_SECS", "ten"),
            ("FOLIO_CACHE_MAX_ENTRIES", "-1"),
        ]));

        assert_eq!(config.fetch_timeout_seconds, 10);
        assert_eq!(config.cache_max_entries, 256);
    }

    #[test]
    fn test_validate_rejects_relative_base() {
        let config = Config::from_lookup(lookup_from(&[("FOLIO_DATA_BASE_URL", "/data")]));
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config::from_lookup(lookup_from(&[("FOLIO_FETCH_TIMEOUT_SECS", "0")]));
        assert!(config.validate().is_err());
    }
}
