//! folio_core - domain types and pure logic for the folio content layer.
//!
//! Nothing in this crate performs I/O. Transport and persistence are
//! expressed as traits ([`fetch::ResourceSource`], [`cache::Store`]) and
//! implemented in `folio_client`.

pub mod cache;
pub mod clock;
pub mod content;
pub mod fetch;
pub mod resource;
pub mod serde;
