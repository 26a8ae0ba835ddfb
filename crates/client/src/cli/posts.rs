//! Blog post listing options.

use clap::Parser;
use folio_core::content::{self, BlogPostList};

/// List blog posts, optionally narrowed by filters.
///
/// Filters are applied in the order search, category, tag, recent.
#[derive(Debug, Parser)]
pub struct PostsCommand {
    /// Case-insensitive search over title, summary, tags and category.
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by category (case-insensitive).
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by tag (case-insensitive).
    #[arg(long)]
    pub tag: Option<String>,

    /// Only the N newest posts.
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "5")]
    pub recent: Option<usize>,
}

/// One narrowing step over the blog index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    Search(String),
    Category(String),
    Tag(String),
    Recent(usize),
}

impl PostFilter {
    pub fn apply(&self, list: &BlogPostList) -> BlogPostList {
        match self {
            PostFilter::Search(query) => content::search_blog_posts(list, query),
            PostFilter::Category(category) => content::blog_posts_by_category(list, category),
            PostFilter::Tag(tag) => content::blog_posts_by_tag(list, tag),
            PostFilter::Recent(limit) => content::recent_blog_posts(list, *limit),
        }
    }
}

impl PostsCommand {
    /// The requested filters in application order.
    pub fn filters(&self) -> Vec<PostFilter> {
        let mut filters = Vec::new();
        if let Some(query) = &self.search {
            filters.push(PostFilter::Search(query.clone()));
        }
        if let Some(category) = &self.category {
            filters.push(PostFilter::Category(category.clone()));
        }
        if let Some(tag) = &self.tag {
            filters.push(PostFilter::Tag(tag.clone()));
        }
        if let Some(limit) = self.recent {
            filters.push(PostFilter::Recent(limit));
        }
        filters
    }
}
