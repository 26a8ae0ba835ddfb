use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tokio::sync::RwLock;

use folio_core::cache::{decode_envelope, encode_envelope, Envelope, Store};
use folio_core::clock::{Clock, SystemClock};
use folio_core::resource::{is_fresh, CachedResource, Resource, ResourceKey};

/// A cached document and the time it was fetched.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: CachedResource,
    fetched_at_ms: i64,
}

enum Lookup<R> {
    Hit(R),
    Stale,
    Miss,
}

/// Cache of fetched documents with per-kind expiry.
///
/// Reads check the memory tier, then the persistent tier; a fresh persistent
/// hit is promoted into memory with its original fetch time. Stale entries
/// are removed from both tiers when they are found. Persistent-tier failures
/// are logged and otherwise ignored, so the cache degrades to memory-only.
///
/// Construct once at startup and share it behind an `Arc`.
pub struct FreshnessCache {
    memory: RwLock<LruCache<ResourceKey, CacheEntry>>,
    store: Option<Arc<dyn Store>>,
    clock: Arc<dyn Clock>,
}

impl FreshnessCache {
    /// Creates a memory-only cache holding at most `max_entries` documents.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory: RwLock::new(LruCache::new(capacity)),
            store: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Adds a persistent tier.
    pub fn with_store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replaces the clock used for timestamps and expiry checks.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Returns the cached document for `key` if one exists and is fresh.
    pub async fn get<R: Resource>(&self, key: &ResourceKey) -> Option<R> {
        if key.kind() != R::KIND {
            tracing::warn!(
                key = %key,
                expected = R::KIND.as_str(),
                "Cache read with mismatched kind"
            );
            return None;
        }

        let now = self.clock.now_millis();
        let ttl = key.ttl();

        let lookup = {
            let mut memory = self.memory.write().await;
            let lookup = match memory.get(key) {
                Some(entry) if is_fresh(entry.fetched_at_ms, now, ttl) => {
                    R::from_cached(&entry.value)
                        .cloned()
                        .map_or(Lookup::Stale, Lookup::Hit)
                }
                Some(_) => Lookup::Stale,
                None => Lookup::Miss,
            };
            if matches!(lookup, Lookup::Stale) {
                memory.pop(key);
            }
            lookup
        };

        match lookup {
            Lookup::Hit(value) => {
                tracing::trace!(key = %key, "Cache hit");
                return Some(value);
            }
            // The persistent tier still decides: it is purged if it holds the
            // same stale copy.
            Lookup::Stale => tracing::trace!(key = %key, "Cached entry expired"),
            Lookup::Miss => {}
        }

        self.get_persisted(key, now).await
    }

    async fn get_persisted<R: Resource>(&self, key: &ResourceKey, now: i64) -> Option<R> {
        let store = self.store.as_ref()?;
        let storage_key = key.storage_key();

        let bytes = match store.get(&storage_key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::trace!(key = %key, "Cache miss");
                return None;
            }
            Err(err) => {
                tracing::warn!(
                    key = %key,
                    error = %err,
                    "Failed to read persisted cache entry"
                );
                return None;
            }
        };

        let envelope: Envelope<R> = match decode_envelope(&bytes) {
            Ok(envelope) => envelope,
            Err(err) => {
                // Corrupt entry - treat as cache miss
                tracing::warn!(
                    key = %key,
                    error = %err,
                    "Persisted cache entry is unreadable"
                );
                self.delete_persisted(key).await;
                return None;
            }
        };

        if !is_fresh(envelope.timestamp, now, key.ttl()) {
            tracing::trace!(key = %key, "Persisted entry expired");
            self.delete_persisted(key).await;
            return None;
        }

        tracing::trace!(key = %key, "Persistent cache hit");
        let entry = CacheEntry {
            value: envelope.data.clone().into_cached(),
            fetched_at_ms: envelope.timestamp,
        };
        self.memory.write().await.put(key.clone(), entry);
        Some(envelope.data)
    }

    /// Stores `value` under `key` with the current time, replacing any
    /// previous entry.
    pub async fn put<R: Resource>(&self, key: &ResourceKey, value: R) {
        if key.kind() != R::KIND {
            tracing::warn!(
                key = %key,
                expected = R::KIND.as_str(),
                "Cache write with mismatched kind"
            );
            return;
        }

        let now = self.clock.now_millis();
        let encoded = self.store.as_ref().map(|_| encode_envelope(&value, now));

        {
            let mut memory = self.memory.write().await;
            memory.put(
                key.clone(),
                CacheEntry {
                    value: value.into_cached(),
                    fetched_at_ms: now,
                },
            );
        }

        let (Some(store), Some(encoded)) = (&self.store, encoded) else {
            return;
        };
        match encoded {
            Ok(bytes) => {
                if let Err(err) = store.set(&key.storage_key(), &bytes).await {
                    tracing::warn!(
                        key = %key,
                        error = %err,
                        "Failed to persist cache entry"
                    );
                }
            }
            Err(err) => {
                tracing::warn!(
                    key = %key,
                    error = %err,
                    "Failed to encode cache entry"
                );
            }
        }
    }

    /// Removes `key` from both tiers.
    pub async fn invalidate(&self, key: &ResourceKey) {
        self.memory.write().await.pop(key);
        self.delete_persisted(key).await;
        tracing::debug!(key = %key, "Cache entry invalidated");
    }

    async fn delete_persisted(&self, key: &ResourceKey) {
        if let Some(store) = &self.store {
            if let Err(err) = store.delete(&key.storage_key()).await {
                tracing::warn!(
                    key = %key,
                    error = %err,
                    "Failed to delete persisted cache entry"
                );
            }
        }
    }

    /// Returns the fresh cached document, or fetches, stores and returns it.
    ///
    /// A failed fetch leaves the cache exactly as it was and its error is
    /// returned unchanged.
    pub async fn load<R, E, F, Fut>(&self, key: &ResourceKey, fetch: F) -> Result<R, E>
    where
        R: Resource,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        if let Some(value) = self.get(key).await {
            return Ok(value);
        }

        tracing::debug!(key = %key, "Fetching uncached document");
        let value = fetch().await?;
        self.put(key, value.clone()).await;
        Ok(value)
    }

    /// Drops every entry from memory and every document key from the
    /// persistent tier. Foreign keys in the store are left alone.
    pub async fn clear(&self) {
        self.memory.write().await.clear();

        let Some(store) = &self.store else {
            return;
        };
        let keys = match store.keys().await {
            Ok(keys) => keys,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to list persisted cache entries");
                return;
            }
        };
        for key in keys.iter().filter_map(|k| ResourceKey::from_storage_key(k)) {
            self.delete_persisted(&key).await;
        }
        tracing::debug!("Cache cleared");
    }
}
