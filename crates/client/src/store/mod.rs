//! Persistent store implementations for the device-local cache tier.
//!
//! - [`FileStore`]: one JSON file per key in a cache directory
//! - [`MemoryStore`]: a process-local map, for tests and ephemeral runs

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
