//! Two-tier freshness cache.
//!
//! The memory tier answers repeated reads within one process without any I/O.
//! The optional persistent tier (any [`folio_core::cache::Store`]) lets a new
//! process reuse a document fetched by a previous one while it is still
//! fresh. Both tiers honor the per-kind TTL from
//! [`folio_core::resource::ResourceKind::ttl`].

mod freshness;

pub use freshness::FreshnessCache;
