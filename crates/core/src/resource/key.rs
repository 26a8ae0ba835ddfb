use std::fmt;
use std::time::Duration;

use crate::fetch::FetchError;

/// TTL for the profile document.
pub const PROFILE_TTL: Duration = Duration::from_secs(10 * 60);
/// TTL for the CV document.
pub const CV_TTL: Duration = Duration::from_secs(10 * 60);
/// TTL for blog, certificate and badge documents.
pub const LIST_TTL: Duration = Duration::from_secs(5 * 60);

/// The shape of a static document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Profile,
    Cv,
    BlogPosts,
    BlogPost,
    Certificates,
    Badges,
}

impl ResourceKind {
    /// Maximum age of a cached document of this kind.
    pub fn ttl(self) -> Duration {
        match self {
            ResourceKind::Profile => PROFILE_TTL,
            ResourceKind::Cv => CV_TTL,
            ResourceKind::BlogPosts
            | ResourceKind::BlogPost
            | ResourceKind::Certificates
            | ResourceKind::Badges => LIST_TTL,
        }
    }

    /// Human-readable name, used in log fields and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Profile => "profile",
            ResourceKind::Cv => "cv",
            ResourceKind::BlogPosts => "blog posts",
            ResourceKind::BlogPost => "blog post",
            ResourceKind::Certificates => "certificates",
            ResourceKind::Badges => "badges",
        }
    }
}

/// Identifies one static document, including the id for per-item documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Profile,
    Cv,
    BlogPosts,
    BlogPost(String),
    Certificates,
    Badges,
}

impl ResourceKey {
    /// Key for a single blog post, rejecting an empty id.
    pub fn blog_post(id: impl Into<String>) -> Result<Self, FetchError> {
        let key = ResourceKey::BlogPost(id.into());
        key.validate()?;
        Ok(key)
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceKey::Profile => ResourceKind::Profile,
            ResourceKey::Cv => ResourceKind::Cv,
            ResourceKey::BlogPosts => ResourceKind::BlogPosts,
            ResourceKey::BlogPost(_) => ResourceKind::BlogPost,
            ResourceKey::Certificates => ResourceKind::Certificates,
            ResourceKey::Badges => ResourceKind::Badges,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.kind().ttl()
    }

    /// Fails with [`FetchError::InvalidId`] when a per-item key has a blank id.
    pub fn validate(&self) -> Result<(), FetchError> {
        match self {
            ResourceKey::BlogPost(id) if id.trim().is_empty() => Err(FetchError::InvalidId),
            _ => Ok(()),
        }
    }

    /// Path of the document relative to the data base URL.
    ///
    /// The blog post id is percent-encoded so it can never escape the
    /// `/blog/` directory.
    pub fn path(&self) -> String {
        match self {
            ResourceKey::Profile => "/profile.json".to_string(),
            ResourceKey::Cv => "/cv.json".to_string(),
            ResourceKey::BlogPosts => "/blog/posts.json".to_string(),
            ResourceKey::BlogPost(id) => format!("/blog/post-{}.json", urlencoding::encode(id)),
            ResourceKey::Certificates => "/certificates.json".to_string(),
            ResourceKey::Badges => "/badges.json".to_string(),
        }
    }

    /// Key under which the document is kept in the persistent store.
    pub fn storage_key(&self) -> String {
        match self {
            ResourceKey::Profile => "profile".to_string(),
            ResourceKey::Cv => "cv".to_string(),
            ResourceKey::BlogPosts => "blog:posts".to_string(),
            ResourceKey::BlogPost(id) => format!("blog:post:{}", id),
            ResourceKey::Certificates => "certificates".to_string(),
            ResourceKey::Badges => "badges".to_string(),
        }
    }

    /// Parses a persistent-store key back into a resource key.
    ///
    /// Returns `None` for keys this crate never writes.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_core::resource::ResourceKey;
    ///
    /// assert_eq!(ResourceKey::from_storage_key("cv"), Some(ResourceKey::Cv));
    /// assert_eq!(
    ///     ResourceKey::from_storage_key("blog:post:42"),
    ///     Some(ResourceKey::BlogPost("42".to_string()))
    /// );
    /// assert_eq!(ResourceKey::from_storage_key("blog:post:"), None);
    /// assert_eq!(ResourceKey::from_storage_key("session"), None);
    /// ```
    pub fn from_storage_key(key: &str) -> Option<Self> {
        match key {
            "profile" => Some(ResourceKey::Profile),
            "cv" => Some(ResourceKey::Cv),
            "blog:posts" => Some(ResourceKey::BlogPosts),
            "certificates" => Some(ResourceKey::Certificates),
            "badges" => Some(ResourceKey::Badges),
            other => other
                .strip_prefix("blog:post:")
                .filter(|id| !id.trim().is_empty())
                .map(|id| ResourceKey::BlogPost(id.to_string())),
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}

/// Returns true while an entry fetched at `fetched_at_ms` may still be served
/// at `now_ms`.
///
/// An entry whose age has reached the TTL is stale, and so is one stamped in
/// the future.
pub fn is_fresh(fetched_at_ms: i64, now_ms: i64, ttl: Duration) -> bool {
    if fetched_at_ms > now_ms {
        return false;
    }
    let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
    now_ms.saturating_sub(fetched_at_ms) < ttl_ms
}
