//! Resource identity: which document, where it lives, how long it stays fresh.

mod cached;
mod key;

pub use cached::{CachedResource, Resource};
pub use key::{is_fresh, ResourceKey, ResourceKind, CV_TTL, LIST_TTL, PROFILE_TTL};
