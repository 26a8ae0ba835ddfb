use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::content::{BadgeList, BlogPost, BlogPostList, CertificateList, Cv, Profile};

use super::ResourceKind;

/// A cached document, tagged by its kind.
///
/// The memory tier stores this instead of an untyped value, so a typed read
/// either yields the expected document or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedResource {
    Profile(Profile),
    Cv(Cv),
    BlogPosts(BlogPostList),
    BlogPost(BlogPost),
    Certificates(CertificateList),
    Badges(BadgeList),
}

impl CachedResource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            CachedResource::Profile(_) => ResourceKind::Profile,
            CachedResource::Cv(_) => ResourceKind::Cv,
            CachedResource::BlogPosts(_) => ResourceKind::BlogPosts,
            CachedResource::BlogPost(_) => ResourceKind::BlogPost,
            CachedResource::Certificates(_) => ResourceKind::Certificates,
            CachedResource::Badges(_) => ResourceKind::Badges,
        }
    }
}

/// A document type that can be fetched and cached.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The kind every value of this type belongs to.
    const KIND: ResourceKind;

    /// Wraps the value into the cache's tagged union.
    fn into_cached(self) -> CachedResource;

    /// Borrows the value back out of the tagged union, if the tag matches.
    fn from_cached(cached: &CachedResource) -> Option<&Self>;
}

macro_rules! impl_resource {
    ($ty:ty, $variant:ident) => {
        impl Resource for $ty {
            const KIND: ResourceKind = ResourceKind::$variant;

            fn into_cached(self) -> CachedResource {
                CachedResource::$variant(self)
            }

            fn from_cached(cached: &CachedResource) -> Option<&Self> {
                match cached {
                    CachedResource::$variant(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

impl_resource!(Profile, Profile);
impl_resource!(Cv, Cv);
impl_resource!(BlogPostList, BlogPosts);
impl_resource!(BlogPost, BlogPost);
impl_resource!(CertificateList, Certificates);
impl_resource!(BadgeList, Badges);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_badges() -> BadgeList {
        BadgeList {
            badges: vec![],
            categories: vec!["Cloud".to_string()],
            total: 0,
            updated_at: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_into_cached_tags_kind() {
        let cached = sample_badges().into_cached();
        assert_eq!(cached.kind(), ResourceKind::Badges);
        assert_eq!(cached.kind(), BadgeList::KIND);
    }

    #[test]
    fn test_from_cached_matching_tag() {
        let cached = sample_badges().into_cached();
        assert_eq!(BadgeList::from_cached(&cached), Some(&sample_badges()));
    }

    #[test]
    fn test_from_cached_mismatched_tag() {
        let cached = sample_badges().into_cached();
        assert!(CertificateList::from_cached(&cached).is_none());
        assert!(Profile::from_cached(&cached).is_none());
    }
}
