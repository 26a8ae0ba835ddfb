//! Resource Fetcher: one HTTP read of one static document, decoded into a
//! typed value.

mod error;
mod traits;

pub use error::{ErrorCode, FetchError, Result};
pub use traits::ResourceSource;

use crate::resource::{Resource, ResourceKey};

/// Fetches and decodes the document identified by `key`.
///
/// A blank blog post id fails with [`FetchError::InvalidId`] before the
/// source is touched. A body that does not decode as `R` is reported as a
/// network error with status 0.
pub async fn fetch_resource<R, S>(source: &S, key: &ResourceKey) -> Result<R>
where
    R: Resource,
    S: ResourceSource + ?Sized,
{
    key.validate()?;

    let path = key.path();
    let body = source.get(&path).await?;

    serde_json::from_slice(&body).map_err(|e| FetchError::Network {
        url: source.locate(&path),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BadgeList;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        body: std::result::Result<&'static str, FetchError>,
        calls: AtomicUsize,
    }

    impl FixedSource {
        fn ok(body: &'static str) -> Self {
            Self {
                body: Ok(body),
                calls: AtomicUsize::new(0),
            }
        }

        fn err(error: FetchError) -> Self {
            Self {
                body: Err(error),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ResourceSource for FixedSource {
        async fn get(&self, _path: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.body.clone().map(|b| b.as_bytes().to_vec())
        }

        fn locate(&self, path: &str) -> String {
            format!("http://content.test/data{}", path)
        }
    }

    #[tokio::test]
    async fn test_decodes_document() {
        let source = FixedSource::ok(
            r#"{"badges": [], "categories": [], "total": 0, "updated_at": "2024-01-01"}"#,
        );
        let badges: BadgeList = fetch_resource(&source, &ResourceKey::Badges)
            .await
            .unwrap();

        assert_eq!(badges.total, 0);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_is_network_error() {
        let source = FixedSource::ok("<html>not json</html>");
        let err = fetch_resource::<BadgeList, _>(&source, &ResourceKey::Badges)
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::NetworkError);
        assert_eq!(err.status(), 0);
        assert!(err
            .to_string()
            .contains("http://content.test/data/badges.json"));
    }

    #[tokio::test]
    async fn test_status_error_passes_through() {
        let source = FixedSource::err(FetchError::Status {
            url: "x".to_string(),
            status: 500,
        });
        let err = fetch_resource::<BadgeList, _>(&source, &ResourceKey::Badges)
            .await
            .unwrap_err();

        assert_eq!(err.status(), 500);
        assert_eq!(err.code(), ErrorCode::FetchError);
    }

    #[tokio::test]
    async fn test_empty_id_never_reaches_source() {
        let source = FixedSource::ok("{}");
        let key = ResourceKey::BlogPost(String::new());
        let err = fetch_resource::<crate::content::BlogPost, _>(&source, &key)
            .await
            .unwrap_err();

        assert_eq!(err, FetchError::InvalidId);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }
}
