//! folio-client CLI entry point.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::Parser;
use folio_client::cli::posts::{PostFilter, PostsCommand};
use folio_client::cli::{Cli, Commands, OutputFormat};
use folio_client::output::format_output;
use folio_client::output::pretty::Pretty;
use folio_client::store::FileStore;
use folio_client::{Binding, Config, DataService, FolioClient, FreshnessCache};
use folio_core::content::BlogPostList;
use folio_core::resource::ResourceKey;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Service = Arc<DataService<FolioClient>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "folio_client=warn"
    } else {
        "folio_client=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config(Config::from_env());
    let client = FolioClient::from_config(&config).context("failed to set up HTTP client")?;

    let mut cache = FreshnessCache::new(config.cache_max_entries);
    if let Some(dir) = &config.cache_dir {
        tracing::debug!(dir = %dir.display(), "Using persistent cache");
        cache = cache.with_store(Arc::new(FileStore::new(dir.clone())));
    }
    let service: Service = Arc::new(DataService::new(client, Arc::new(cache)));

    if cli.refresh {
        if let Some(key) = base_key(&cli.command) {
            service.invalidate(&key).await;
        }
    }

    run(&cli, &service).await
}

/// The document a command reads, for `--refresh`.
fn base_key(command: &Commands) -> Option<ResourceKey> {
    match command {
        Commands::Profile => Some(ResourceKey::Profile),
        Commands::Cv => Some(ResourceKey::Cv),
        Commands::Posts(_) => Some(ResourceKey::BlogPosts),
        Commands::Post { id } => ResourceKey::blog_post(id.as_str()).ok(),
        Commands::Certificates { .. } => Some(ResourceKey::Certificates),
        Commands::Badges { .. } => Some(ResourceKey::Badges),
        Commands::Validate | Commands::Warm | Commands::ClearCache => None,
    }
}

/// Activates `binding` for `key` and waits for its final state.
async fn resolve<K, T>(binding: Binding<K, T>, key: K) -> anyhow::Result<T>
where
    K: Clone + PartialEq + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    binding.activate(key).await;
    let state = binding.state();
    match (state.data, state.error) {
        (_, Some(error)) => Err(anyhow!(error)),
        (Some(data), None) => Ok(data),
        (None, None) => Err(anyhow!("no data loaded")),
    }
}

fn print<T: Serialize + Pretty>(value: &T, format: OutputFormat) {
    println!("{}", format_output(value, format));
}

/// Loads the blog index through the binding for the first filter, then
/// narrows it by the rest.
async fn load_posts(service: &Service, cmd: &PostsCommand) -> anyhow::Result<BlogPostList> {
    let mut filters = cmd.filters().into_iter();
    let list = match filters.next() {
        None => resolve(service.blog_posts_binding(), ()).await?,
        Some(PostFilter::Search(query)) => {
            resolve(service.search_blog_posts_binding(), query).await?
        }
        Some(PostFilter::Category(category)) => {
            resolve(service.blog_posts_by_category_binding(), category).await?
        }
        Some(PostFilter::Tag(tag)) => resolve(service.blog_posts_by_tag_binding(), tag).await?,
        Some(PostFilter::Recent(limit)) => {
            resolve(service.recent_blog_posts_binding(), limit).await?
        }
    };
    Ok(filters.fold(list, |list, filter| filter.apply(&list)))
}

async fn run(cli: &Cli, service: &Service) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Profile => {
            let profile = resolve(service.profile_binding(), ()).await?;
            print(&profile, cli.format);
        }
        Commands::Cv => {
            let cv = resolve(service.cv_binding(), ()).await?;
            print(&cv, cli.format);
        }
        Commands::Posts(cmd) => {
            let list = load_posts(service, cmd).await?;
            print(&list, cli.format);
        }
        Commands::Post { id } => {
            let post = resolve(service.blog_post_binding(), id.clone()).await?;
            print(&post, cli.format);
        }
        Commands::Certificates { valid } => {
            let list = if *valid {
                resolve(service.valid_certificates_binding(), ()).await?
            } else {
                resolve(service.certificates_binding(), ()).await?
            };
            print(&list, cli.format);
        }
        Commands::Badges { category } => {
            let list = match category {
                Some(category) => {
                    resolve(service.badges_by_category_binding(), category.clone()).await?
                }
                None => resolve(service.badges_binding(), ()).await?,
            };
            print(&list, cli.format);
        }
        Commands::Validate => {
            let report = resolve(service.validation_binding(), ()).await?;
            print(&report, cli.format);
            if !report.valid {
                return Err(anyhow!("validation failed"));
            }
        }
        Commands::Warm => {
            let warmed = service.warm().await;
            if !cli.quiet {
                println!("Warmed {} of 3 documents", warmed);
            }
        }
        Commands::ClearCache => {
            service.clear_cache().await;
            if !cli.quiet {
                println!("Cache cleared");
            }
        }
    }

    Ok(())
}
