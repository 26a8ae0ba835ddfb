//! Serde helper functions for content documents.
//!
//! Content files are hand-authored, so list fields are sometimes written as
//! `null` instead of being left out. These helpers normalize both cases.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, treating an explicit `null` as `T::default()`.
///
/// Combine with `#[serde(default)]` so that a missing field is also accepted.
pub fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_null_as_default")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        expiry: Option<String>,
    }

    #[test]
    fn test_null_list_becomes_empty() {
        let json = r#"{"tags": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert!(result.tags.is_empty());
    }

    #[test]
    fn test_missing_list_becomes_empty() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert!(result.tags.is_empty());
        assert_eq!(result.expiry, None);
    }

    #[test]
    fn test_present_list_is_kept() {
        let json = r#"{"tags": ["rust", "web"]}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.tags, vec!["rust", "web"]);
    }

    #[test]
    fn test_empty_string_is_none() {
        let json = r#"{"expiry": "  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.expiry, None);
    }

    #[test]
    fn test_non_empty_string_is_some() {
        let json = r#"{"expiry": "2030-01-01"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.expiry, Some("2030-01-01".to_string()));
    }
}
