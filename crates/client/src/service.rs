//! Data service: cache-backed accessors and derived views over the static
//! content documents.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;

use folio_core::content::{self, BadgeList, BlogPost, BlogPostList, CertificateList, Cv, Profile};
use folio_core::fetch::{fetch_resource, ResourceSource, Result};
use folio_core::resource::{Resource, ResourceKey};

use crate::binding::{Binding, LoadFuture, Refresh};
use crate::cache::FreshnessCache;

/// Number of posts loaded by id during [`DataService::validate_data`].
const VALIDATED_POST_COUNT: usize = 3;

/// Outcome of [`DataService::validate_data`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Single entry point for content reads.
///
/// Every accessor goes through the shared [`FreshnessCache`]. Derived views
/// are recomputed from the cached base list on every call and are never
/// cached under their own key.
pub struct DataService<S> {
    source: S,
    cache: Arc<FreshnessCache>,
}

impl<S: ResourceSource> DataService<S> {
    pub fn new(source: S, cache: Arc<FreshnessCache>) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &Arc<FreshnessCache> {
        &self.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    async fn load<R: Resource>(&self, key: ResourceKey) -> Result<R> {
        // Rejected before the cache is consulted so a bad id never reaches
        // either tier.
        key.validate()?;
        self.cache
            .load(&key, || fetch_resource(&self.source, &key))
            .await
    }

    pub async fn profile(&self) -> Result<Profile> {
        self.load(ResourceKey::Profile).await
    }

    pub async fn cv(&self) -> Result<Cv> {
        self.load(ResourceKey::Cv).await
    }

    pub async fn blog_posts(&self) -> Result<BlogPostList> {
        self.load(ResourceKey::BlogPosts).await
    }

    pub async fn blog_post(&self, id: &str) -> Result<BlogPost> {
        self.load(ResourceKey::BlogPost(id.to_string())).await
    }

    pub async fn certificates(&self) -> Result<CertificateList> {
        self.load(ResourceKey::Certificates).await
    }

    pub async fn badges(&self) -> Result<BadgeList> {
        self.load(ResourceKey::Badges).await
    }

    pub async fn search_blog_posts(&self, query: &str) -> Result<BlogPostList> {
        let list = self.blog_posts().await?;
        Ok(content::search_blog_posts(&list, query))
    }

    pub async fn blog_posts_by_category(&self, category: &str) -> Result<BlogPostList> {
        let list = self.blog_posts().await?;
        Ok(content::blog_posts_by_category(&list, category))
    }

    pub async fn blog_posts_by_tag(&self, tag: &str) -> Result<BlogPostList> {
        let list = self.blog_posts().await?;
        Ok(content::blog_posts_by_tag(&list, tag))
    }

    pub async fn recent_blog_posts(&self, limit: usize) -> Result<BlogPostList> {
        let list = self.blog_posts().await?;
        Ok(content::recent_blog_posts(&list, limit))
    }

    /// Certificates that have not expired according to the cache clock.
    pub async fn valid_certificates(&self) -> Result<CertificateList> {
        let list = self.certificates().await?;
        Ok(content::valid_certificates(&list, self.cache.clock().now()))
    }

    pub async fn badges_by_category(&self, category: &str) -> Result<BadgeList> {
        let list = self.badges().await?;
        Ok(content::badges_by_category(&list, category))
    }

    pub async fn invalidate(&self, key: &ResourceKey) {
        self.cache.invalidate(key).await;
    }

    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    /// Preloads the profile, CV and blog index concurrently.
    ///
    /// Failures are logged and skipped. Returns how many documents are now
    /// cached.
    pub async fn warm(&self) -> usize {
        let (profile, cv, posts) = tokio::join!(self.profile(), self.cv(), self.blog_posts());

        let results = [
            (ResourceKey::Profile, profile.err()),
            (ResourceKey::Cv, cv.err()),
            (ResourceKey::BlogPosts, posts.err()),
        ];

        let mut warmed = 0;
        for (key, error) in results {
            match error {
                None => warmed += 1,
                Some(err) => {
                    tracing::warn!(key = %key, error = %err, "Failed to warm cache entry");
                }
            }
        }
        tracing::debug!(warmed, "Cache warmed");
        warmed
    }

    /// Loads every document plus the first few posts by id and reports
    /// anything that fails to load or decode.
    pub async fn validate_data(&self) -> ValidationReport {
        let mut errors = Vec::new();

        match self.validate_lists().await {
            Ok(posts) => {
                for post in posts.posts.iter().take(VALIDATED_POST_COUNT) {
                    if let Err(err) = self.blog_post(&post.id).await {
                        errors.push(format!("Blog post {} is invalid: {}", post.id, err));
                    }
                }
            }
            Err(err) => errors.push(format!("Data validation failed: {}", err)),
        }

        ValidationReport {
            valid: errors.is_empty(),
            errors,
        }
    }

    async fn validate_lists(&self) -> Result<BlogPostList> {
        self.profile().await?;
        let posts = self.blog_posts().await?;
        self.cv().await?;
        self.certificates().await?;
        self.badges().await?;
        Ok(posts)
    }
}

fn boxed<T, Fut>(fut: Fut) -> LoadFuture<T>
where
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    Box::pin(fut)
}

impl<S: ResourceSource + 'static> DataService<S> {
    /// Builds a binding whose loads go through `load`.
    ///
    /// On a forced refresh the base document named by `base` is invalidated
    /// first, so derived views also pick up a new copy.
    fn bind<K, T, B, L>(self: &Arc<Self>, base: B, load: L) -> Binding<K, T>
    where
        K: Clone + PartialEq + Send + 'static,
        T: Clone + Send + Sync + 'static,
        B: Fn(&K) -> Option<ResourceKey> + Send + Sync + 'static,
        L: Fn(Arc<Self>, K) -> LoadFuture<T> + Send + Sync + 'static,
    {
        let service = Arc::clone(self);
        Binding::new(move |key: K, refresh| {
            let base = base(&key);
            let invalidate = Arc::clone(&service);
            let fut = load(Arc::clone(&service), key);
            boxed(async move {
                if let (Refresh::Force, Some(base)) = (refresh, base) {
                    invalidate.invalidate(&base).await;
                }
                fut.await
            })
        })
    }

    pub fn profile_binding(self: &Arc<Self>) -> Binding<(), Profile> {
        self.bind(
            |_| Some(ResourceKey::Profile),
            |service, ()| boxed(async move { service.profile().await }),
        )
    }

    pub fn cv_binding(self: &Arc<Self>) -> Binding<(), Cv> {
        self.bind(
            |_| Some(ResourceKey::Cv),
            |service, ()| boxed(async move { service.cv().await }),
        )
    }

    pub fn blog_posts_binding(self: &Arc<Self>) -> Binding<(), BlogPostList> {
        self.bind(
            |_| Some(ResourceKey::BlogPosts),
            |service, ()| boxed(async move { service.blog_posts().await }),
        )
    }

    /// Keyed by post id. A blank id surfaces as an error state.
    pub fn blog_post_binding(self: &Arc<Self>) -> Binding<String, BlogPost> {
        self.bind(
            |id: &String| ResourceKey::blog_post(id.as_str()).ok(),
            |service, id: String| boxed(async move { service.blog_post(&id).await }),
        )
    }

    pub fn certificates_binding(self: &Arc<Self>) -> Binding<(), CertificateList> {
        self.bind(
            |_| Some(ResourceKey::Certificates),
            |service, ()| boxed(async move { service.certificates().await }),
        )
    }

    pub fn badges_binding(self: &Arc<Self>) -> Binding<(), BadgeList> {
        self.bind(
            |_| Some(ResourceKey::Badges),
            |service, ()| boxed(async move { service.badges().await }),
        )
    }

    /// Keyed by search query.
    pub fn search_blog_posts_binding(self: &Arc<Self>) -> Binding<String, BlogPostList> {
        self.bind(
            |_| Some(ResourceKey::BlogPosts),
            |service, query: String| {
                boxed(async move { service.search_blog_posts(&query).await })
            },
        )
    }

    pub fn blog_posts_by_category_binding(self: &Arc<Self>) -> Binding<String, BlogPostList> {
        self.bind(
            |_| Some(ResourceKey::BlogPosts),
            |service, category: String| {
                boxed(async move { service.blog_posts_by_category(&category).await })
            },
        )
    }

    pub fn blog_posts_by_tag_binding(self: &Arc<Self>) -> Binding<String, BlogPostList> {
        self.bind(
            |_| Some(ResourceKey::BlogPosts),
            |service, tag: String| boxed(async move { service.blog_posts_by_tag(&tag).await }),
        )
    }

    /// Keyed by the number of posts to return.
    pub fn recent_blog_posts_binding(self: &Arc<Self>) -> Binding<usize, BlogPostList> {
        self.bind(
            |_| Some(ResourceKey::BlogPosts),
            |service, limit: usize| {
                boxed(async move { service.recent_blog_posts(limit).await })
            },
        )
    }

    pub fn valid_certificates_binding(self: &Arc<Self>) -> Binding<(), CertificateList> {
        self.bind(
            |_| Some(ResourceKey::Certificates),
            |service, ()| boxed(async move { service.valid_certificates().await }),
        )
    }

    pub fn badges_by_category_binding(self: &Arc<Self>) -> Binding<String, BadgeList> {
        self.bind(
            |_| Some(ResourceKey::Badges),
            |service, category: String| {
                boxed(async move { service.badges_by_category(&category).await })
            },
        )
    }

    /// Binding over [`DataService::validate_data`]. Refetching clears the
    /// whole cache so every document is read again.
    pub fn validation_binding(self: &Arc<Self>) -> Binding<(), ValidationReport> {
        let service = Arc::clone(self);
        Binding::new(move |(), refresh| {
            let service = Arc::clone(&service);
            boxed(async move {
                if refresh == Refresh::Force {
                    service.clear_cache().await;
                }
                Ok(service.validate_data().await)
            })
        })
    }
}
