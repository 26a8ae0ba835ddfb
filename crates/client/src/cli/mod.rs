//! CLI command definitions.

pub mod posts;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;

/// Cached reader for the folio static content documents.
#[derive(Debug, Parser)]
#[command(name = "folio-client")]
#[command(about = "Cached reader for the folio static content documents", long_about = None)]
pub struct Cli {
    /// Base URL of the documents (overrides FOLIO_DATA_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Persistent cache directory (overrides FOLIO_CACHE_DIR).
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Keep the cache in memory only, even if a cache directory is configured.
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Bypass the cache and fetch the document again.
    #[arg(long, global = true)]
    pub refresh: bool,

    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Applies the command-line overrides on top of `base`.
    pub fn config(&self, base: Config) -> Config {
        let mut config = base;
        if let Some(url) = &self.base_url {
            config.data_base_url = url.clone();
        }
        if let Some(dir) = &self.cache_dir {
            config.cache_dir = Some(dir.clone());
        }
        if self.no_persist {
            config.cache_dir = None;
        }
        config
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the profile.
    Profile,
    /// Show the CV.
    Cv,
    /// List blog posts.
    Posts(posts::PostsCommand),
    /// Show a single blog post.
    Post {
        /// Post ID.
        id: String,
    },
    /// List certificates.
    Certificates {
        /// Only certificates that have not expired.
        #[arg(long)]
        valid: bool,
    },
    /// List badges.
    Badges {
        /// Filter by category (case-insensitive).
        #[arg(long)]
        category: Option<String>,
    },
    /// Load every document and report the ones that fail.
    Validate,
    /// Preload the profile, CV and blog index into the cache.
    Warm,
    /// Remove every cached document.
    ClearCache,
}
