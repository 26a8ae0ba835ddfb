//! folio_client - cached client for the folio static content documents.
//!
//! The pieces compose bottom-up: a [`FolioClient`] fetches documents, the
//! [`FreshnessCache`] keeps them fresh across reads (and across processes
//! when given a [`store::FileStore`]), the [`DataService`] exposes typed
//! accessors and derived views, and a [`Binding`] turns any of those into
//! observable loading/success/error state.

pub mod binding;
pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod service;
pub mod store;

pub use binding::{AsyncState, Binding, LoadingState, Refresh};
pub use cache::FreshnessCache;
pub use client::FolioClient;
pub use config::Config;
pub use error::{ClientError, Result};
pub use service::{DataService, ValidationReport};
