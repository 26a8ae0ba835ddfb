//! Derived views over cached content lists.
//!
//! These are pure functions: they never touch the cache and are recomputed on
//! every call from the full base list. Every view rewrites `total` to the
//! length of the filtered list.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, Utc};

use super::{BadgeList, BlogPostList, BlogPostSummary, CertificateList};

/// Number of posts returned by [`recent_blog_posts`] when no limit is given.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Parses a content timestamp.
///
/// Accepts RFC 3339 (`2024-03-01T10:00:00Z`) or a bare date (`2024-03-01`,
/// read as midnight UTC). Returns `None` for anything else.
pub fn parse_content_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn with_posts(list: &BlogPostList, posts: Vec<BlogPostSummary>) -> BlogPostList {
    BlogPostList {
        total: posts.len(),
        posts,
        ..list.clone()
    }
}

/// Case-insensitive search over title, summary, tags and category.
///
/// A blank query returns the list unchanged.
pub fn search_blog_posts(list: &BlogPostList, query: &str) -> BlogPostList {
    if query.trim().is_empty() {
        return list.clone();
    }

    let needle = query.to_lowercase();
    let posts = list
        .posts
        .iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&needle)
                || post.summary.to_lowercase().contains(&needle)
                || post
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
                || post
                    .category
                    .as_deref()
                    .is_some_and(|category| category.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    with_posts(list, posts)
}

/// Posts whose category equals `category`, ignoring case.
///
/// An empty category returns the list unchanged.
pub fn blog_posts_by_category(list: &BlogPostList, category: &str) -> BlogPostList {
    if category.is_empty() {
        return list.clone();
    }

    let wanted = category.to_lowercase();
    let posts = list
        .posts
        .iter()
        .filter(|post| {
            post.category
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == wanted)
        })
        .cloned()
        .collect();

    with_posts(list, posts)
}

/// Posts carrying `tag`, ignoring case.
///
/// An empty tag returns the list unchanged.
pub fn blog_posts_by_tag(list: &BlogPostList, tag: &str) -> BlogPostList {
    if tag.is_empty() {
        return list.clone();
    }

    let wanted = tag.to_lowercase();
    let posts = list
        .posts
        .iter()
        .filter(|post| post.tags.iter().any(|t| t.to_lowercase() == wanted))
        .cloned()
        .collect();

    with_posts(list, posts)
}

/// The `limit` newest posts by `created_at`.
///
/// Posts with an unparsable `created_at` sort after every dated post. The sort
/// is stable, so ties keep their original order.
pub fn recent_blog_posts(list: &BlogPostList, limit: usize) -> BlogPostList {
    let mut posts = list.posts.clone();
    posts.sort_by_key(|post| Reverse(parse_content_timestamp(&post.created_at)));
    posts.truncate(limit);

    with_posts(list, posts)
}

/// Certificates that have not expired at `now`.
///
/// A certificate without an expiry date never expires. An expiry date that
/// cannot be parsed is treated as expired.
pub fn valid_certificates(list: &CertificateList, now: DateTime<Utc>) -> CertificateList {
    let certificates: Vec<_> = list
        .certificates
        .iter()
        .filter(|cert| match cert.expiry_date.as_deref() {
            None => true,
            Some(expiry) => parse_content_timestamp(expiry).is_some_and(|at| at > now),
        })
        .cloned()
        .collect();

    CertificateList {
        total: certificates.len(),
        certificates,
        ..list.clone()
    }
}

/// Badges whose category equals `category`, ignoring case.
///
/// An empty category returns the list unchanged.
pub fn badges_by_category(list: &BadgeList, category: &str) -> BadgeList {
    if category.is_empty() {
        return list.clone();
    }

    let wanted = category.to_lowercase();
    let badges: Vec<_> = list
        .badges
        .iter()
        .filter(|badge| badge.category.to_lowercase() == wanted)
        .cloned()
        .collect();

    BadgeList {
        total: badges.len(),
        badges,
        ..list.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Badge, Certificate};
    use chrono::TimeZone;

    fn post(
        id: &str,
        title: &str,
        created_at: &str,
        tags: &[&str],
        category: Option<&str>,
    ) -> BlogPostSummary {
        BlogPostSummary {
            id: id.to_string(),
            title: title.to_string(),
            summary: format!("Summary of {}", title),
            author: "Ada".to_string(),
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published: true,
            featured_image: String::new(),
            read_time: "3 min".to_string(),
            category: category.map(str::to_string),
        }
    }

    fn sample_posts() -> BlogPostList {
        let posts = vec![
            post("1", "Async Rust", "2024-01-10", &["rust", "async"], Some("Engineering")),
            post("2", "Hiking the Alps", "2024-03-05T08:00:00Z", &["travel"], Some("Life")),
            post("3", "Cooking pasta", "not a date", &["food"], None),
            post("4", "Rust lifetimes", "2023-12-01", &["Rust"], Some("engineering")),
        ];
        BlogPostList {
            total: posts.len(),
            posts,
            categories: Some(vec!["Engineering".to_string(), "Life".to_string()]),
            tags: None,
            updated_at: "2024-03-05".to_string(),
        }
    }

    fn ids(list: &BlogPostList) -> Vec<&str> {
        list.posts.iter().map(|p| p.id.as_str()).collect()
    }

    fn certificate(id: &str, expiry: Option<&str>) -> Certificate {
        Certificate {
            id: id.to_string(),
            name: format!("Cert {}", id),
            issuer: "Issuer".to_string(),
            issue_date: "2020-01-01".to_string(),
            expiry_date: expiry.map(str::to_string),
            credential_id: String::new(),
            credential_url: String::new(),
            description: String::new(),
            certificate_image: String::new(),
            badge_image: String::new(),
            skills: vec![],
        }
    }

    fn badge(id: &str, category: &str) -> Badge {
        Badge {
            id: id.to_string(),
            name: format!("Badge {}", id),
            description: String::new(),
            issuer: "Issuer".to_string(),
            issue_date: "2022-01-01".to_string(),
            badge_url: String::new(),
            verify_url: String::new(),
            category: category.to_string(),
            color: "#000".to_string(),
        }
    }

    #[test]
    fn test_parse_content_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_content_timestamp("2024-03-01"), Some(expected));
        assert_eq!(
            parse_content_timestamp("2024-03-01T00:00:00Z"),
            Some(expected)
        );
        assert_eq!(
            parse_content_timestamp("2024-03-01T02:00:00+02:00"),
            Some(expected)
        );
        assert_eq!(parse_content_timestamp("yesterday"), None);
    }

    #[test]
    fn test_search_matches_title_tag_and_category() {
        let list = sample_posts();

        assert_eq!(ids(&search_blog_posts(&list, "RUST")), vec!["1", "4"]);
        assert_eq!(ids(&search_blog_posts(&list, "travel")), vec!["2"]);
        // "Rust lifetimes" matches on its title, "Hiking the Alps" on its category.
        assert_eq!(ids(&search_blog_posts(&list, "life")), vec!["2", "4"]);
        assert_eq!(search_blog_posts(&list, "rust").total, 2);
    }

    #[test]
    fn test_search_blank_query_returns_everything() {
        let list = sample_posts();
        assert_eq!(search_blog_posts(&list, "   "), list);
    }

    #[test]
    fn test_by_category_ignores_case() {
        let list = sample_posts();
        let filtered = blog_posts_by_category(&list, "ENGINEERING");

        assert_eq!(ids(&filtered), vec!["1", "4"]);
        assert_eq!(filtered.total, 2);
        assert_eq!(filtered.categories, list.categories);
    }

    #[test]
    fn test_by_category_empty_returns_everything() {
        let list = sample_posts();
        assert_eq!(blog_posts_by_category(&list, ""), list);
    }

    #[test]
    fn test_by_tag_is_exact_and_case_insensitive() {
        let list = sample_posts();

        assert_eq!(ids(&blog_posts_by_tag(&list, "rust")), vec!["1", "4"]);
        assert!(blog_posts_by_tag(&list, "rus").posts.is_empty());
    }

    #[test]
    fn test_recent_sorts_newest_first_and_limits() {
        let list = sample_posts();

        let recent = recent_blog_posts(&list, 2);
        assert_eq!(ids(&recent), vec!["2", "1"]);
        assert_eq!(recent.total, 2);

        let all = recent_blog_posts(&list, DEFAULT_RECENT_LIMIT);
        assert_eq!(ids(&all), vec!["2", "1", "4", "3"]);
    }

    #[test]
    fn test_valid_certificates_excludes_expired() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let list = CertificateList {
            certificates: vec![
                certificate("never", None),
                certificate("expired", Some("2024-01-01")),
                certificate("future", Some("2030-01-01")),
                certificate("garbage", Some("soon")),
            ],
            total: 4,
            updated_at: "2025-01-01".to_string(),
        };

        let valid = valid_certificates(&list, now);
        let kept: Vec<_> = valid.certificates.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(kept, vec!["never", "future"]);
        assert_eq!(valid.total, 2);
        // The input is untouched.
        assert_eq!(list.certificates.len(), 4);
    }

    #[test]
    fn test_badges_by_category() {
        let list = BadgeList {
            badges: vec![badge("a", "Cloud"), badge("b", "Security"), badge("c", "cloud")],
            categories: vec!["Cloud".to_string(), "Security".to_string()],
            total: 3,
            updated_at: "2025-01-01".to_string(),
        };

        let cloud = badges_by_category(&list, "CLOUD");
        assert_eq!(cloud.badges.len(), 2);
        assert_eq!(cloud.total, 2);
        assert_eq!(badges_by_category(&list, ""), list);
    }
}
