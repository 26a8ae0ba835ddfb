use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_null_as_default, deserialize_optional_string};

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// A link to a social media account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

/// SEO metadata attached to the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSeo {
    pub meta_title: String,
    pub meta_description: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub keywords: Vec<String>,
    pub og_image: String,
}

/// One step on the career/life timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyStep {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hobby {
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelExperience {
    pub place: String,
    pub year: String,
    pub description: String,
    pub highlight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishListCategory {
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub items: Vec<String>,
}

/// One chapter of the interactive story album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryChapter {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub note: String,
    pub year: String,
    pub emotion: String,
}

/// The site owner's profile (`/profile.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(
        rename = "personalStory",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub personal_story: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub journey: Vec<JourneyStep>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub hobbies: Vec<Hobby>,
    #[serde(
        rename = "travelExperiences",
        default,
        deserialize_with = "deserialize_null_as_default"
    )]
    pub travel_experiences: Vec<TravelExperience>,
    #[serde(
        rename = "wishList",
        default,
        deserialize_with = "deserialize_null_as_default"
    )]
    pub wish_list: Vec<WishListCategory>,
    #[serde(
        rename = "funFacts",
        default,
        deserialize_with = "deserialize_null_as_default"
    )]
    pub fun_facts: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub values: Vec<String>,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(rename = "profileImage")]
    pub profile_image: String,
    #[serde(
        rename = "galleryImages",
        default,
        deserialize_with = "deserialize_null_as_default"
    )]
    pub gallery_images: Vec<String>,
    #[serde(
        rename = "storyAlbum",
        default,
        deserialize_with = "deserialize_null_as_default"
    )]
    pub story_album: Vec<StoryChapter>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub skills: Vec<SkillCategory>,
    #[serde(
        rename = "socialMedia",
        default,
        deserialize_with = "deserialize_null_as_default"
    )]
    pub social_media: Vec<SocialMediaLink>,
    #[serde(
        rename = "typewriterTexts",
        default,
        deserialize_with = "deserialize_null_as_default"
    )]
    pub typewriter_texts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<ProfileSeo>,
    pub updated_at: String,
}

// ---------------------------------------------------------------------------
// CV
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    /// `None` while the position is current.
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub honors: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub relevant_coursework: Vec<String>,
}

/// A single skill with a proficiency level (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub level: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub items: Vec<SkillItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub language: String,
    pub level: String,
}

/// Curriculum vitae (`/cv.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cv {
    pub personal_info: PersonalInfo,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub skills: Vec<SkillCategory>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub languages: Vec<Language>,
    pub download_url: String,
    pub updated_at: String,
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostSeo {
    pub meta_title: String,
    pub meta_description: String,
    pub og_image: String,
}

/// A full blog post (`/blog/post-{id}.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub tags: Vec<String>,
    pub published: bool,
    pub featured_image: String,
    pub read_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub seo: BlogPostSeo,
}

/// A blog post as it appears in the post list (no body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub tags: Vec<String>,
    pub published: bool,
    pub featured_image: String,
    pub read_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// The blog index (`/blog/posts.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostList {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub posts: Vec<BlogPostSummary>,
    pub total: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub updated_at: String,
}

// ---------------------------------------------------------------------------
// Certificates and badges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    /// `None` for certificates that never expire.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub expiry_date: Option<String>,
    pub credential_id: String,
    pub credential_url: String,
    pub description: String,
    pub certificate_image: String,
    pub badge_image: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub skills: Vec<String>,
}

/// `/certificates.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateList {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub certificates: Vec<Certificate>,
    pub total: usize,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub issuer: String,
    pub issue_date: String,
    pub badge_url: String,
    pub verify_url: String,
    pub category: String,
    pub color: String,
}

/// `/badges.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeList {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub badges: Vec<Badge>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub categories: Vec<String>,
    pub total: usize,
    pub updated_at: String,
}
