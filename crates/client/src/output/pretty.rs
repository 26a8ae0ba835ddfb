//! Pretty output formatting.

use folio_core::content::{
    Badge, BadgeList, BlogPost, BlogPostList, BlogPostSummary, Certificate, CertificateList, Cv,
    Profile,
};

use crate::service::ValidationReport;

/// Human-readable rendering of a document or report.
pub trait Pretty {
    fn pretty(&self) -> String;
}

macro_rules! impl_pretty {
    ($($ty:ty => $format:ident),* $(,)?) => {
        $(
            impl Pretty for $ty {
                fn pretty(&self) -> String {
                    $format(self)
                }
            }
        )*
    };
}

impl_pretty! {
    Profile => format_profile,
    Cv => format_cv,
    BlogPostList => format_posts,
    BlogPost => format_post,
    CertificateList => format_certificates,
    BadgeList => format_badges,
    ValidationReport => format_report,
}

fn rule() -> String {
    "-".repeat(40)
}

/// Format the profile for display.
pub fn format_profile(profile: &Profile) -> String {
    let mut output = format!("{}\n  {}", profile.name, profile.title);
    if !profile.location.is_empty() {
        output.push_str(&format!("\n  Location: {}", profile.location));
    }
    output.push_str(&format!("\n  Email: {}", profile.email));
    if !profile.website.is_empty() {
        output.push_str(&format!("\n  Website: {}", profile.website));
    }
    if !profile.summary.is_empty() {
        output.push_str(&format!("\n\n{}", profile.summary));
    }
    output
}

/// Format the CV for display.
pub fn format_cv(cv: &Cv) -> String {
    let info = &cv.personal_info;
    let mut output = format!("{}\n  {}", info.name, info.title);

    if !cv.work_experience.is_empty() {
        output.push_str(&format!("\n\nEXPERIENCE ({})\n{}", cv.work_experience.len(), rule()));
        for job in &cv.work_experience {
            let end = match (&job.end_date, job.current) {
                (_, true) | (None, _) => "present",
                (Some(end), false) => end.as_str(),
            };
            output.push_str(&format!(
                "\n{} at {}\n  {} - {}",
                job.position, job.company, job.start_date, end
            ));
        }
    }

    if !cv.education.is_empty() {
        output.push_str(&format!("\n\nEDUCATION ({})\n{}", cv.education.len(), rule()));
        for school in &cv.education {
            output.push_str(&format!(
                "\n{}, {}\n  {} - {}",
                school.degree, school.institution, school.start_date, school.end_date
            ));
        }
    }

    if !cv.languages.is_empty() {
        let languages: Vec<_> = cv
            .languages
            .iter()
            .map(|l| format!("{} ({})", l.language, l.level))
            .collect();
        output.push_str(&format!("\n\nLanguages: {}", languages.join(", ")));
    }
    output
}

fn format_post_line(post: &BlogPostSummary) -> String {
    let mut output = format!("{}\n  ID: {}\n  Date: {}", post.title, post.id, post.created_at);
    if let Some(category) = &post.category {
        output.push_str(&format!("\n  Category: {}", category));
    }
    if !post.tags.is_empty() {
        output.push_str(&format!("\n  Tags: {}", post.tags.join(", ")));
    }
    output
}

/// Format a post list for display.
pub fn format_posts(list: &BlogPostList) -> String {
    if list.posts.is_empty() {
        return "No posts found.".to_string();
    }
    let mut output = format!("POSTS ({})\n", list.total);
    output.push_str(&rule());
    for post in &list.posts {
        output.push_str(&format!("\n{}", format_post_line(post)));
        output.push('\n');
    }
    output
}

/// Format a full blog post for display.
pub fn format_post(post: &BlogPost) -> String {
    format!(
        "{}\n  By {} on {} ({})\n\n{}",
        post.title, post.author, post.created_at, post.read_time, post.content
    )
}

fn format_certificate(cert: &Certificate) -> String {
    let expiry = cert.expiry_date.as_deref().unwrap_or("never");
    format!(
        "{}\n  Issuer: {}\n  Issued: {}\n  Expires: {}",
        cert.name, cert.issuer, cert.issue_date, expiry
    )
}

/// Format certificates for display.
pub fn format_certificates(list: &CertificateList) -> String {
    if list.certificates.is_empty() {
        return "No certificates found.".to_string();
    }
    let mut output = format!("CERTIFICATES ({})\n", list.total);
    output.push_str(&rule());
    for cert in &list.certificates {
        output.push_str(&format!("\n{}", format_certificate(cert)));
        output.push('\n');
    }
    output
}

fn format_badge(badge: &Badge) -> String {
    format!(
        "{} [{}]\n  Issuer: {}\n  Issued: {}",
        badge.name, badge.category, badge.issuer, badge.issue_date
    )
}

/// Format badges for display.
pub fn format_badges(list: &BadgeList) -> String {
    if list.badges.is_empty() {
        return "No badges found.".to_string();
    }
    let mut output = format!("BADGES ({})\n", list.total);
    output.push_str(&rule());
    for badge in &list.badges {
        output.push_str(&format!("\n{}", format_badge(badge)));
        output.push('\n');
    }
    output
}

/// Format a validation report for display.
pub fn format_report(report: &ValidationReport) -> String {
    if report.valid {
        return "All documents are valid.".to_string();
    }
    let mut output = format!("INVALID ({})\n", report.errors.len());
    output.push_str(&rule());
    for error in &report.errors {
        output.push_str(&format!("\n  {}", error));
    }
    output
}
