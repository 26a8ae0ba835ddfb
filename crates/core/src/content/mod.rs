mod types;
mod views;

pub use types::{
    Badge, BadgeList, BlogPost, BlogPostList, BlogPostSeo, BlogPostSummary, Certificate,
    CertificateList, Cv, Education, Hobby, JourneyStep, Language, PersonalInfo, Profile,
    ProfileSeo, SkillCategory, SkillItem, SocialMediaLink, StoryChapter, TravelExperience,
    WishListCategory, WorkExperience,
};
pub use views::{
    badges_by_category, blog_posts_by_category, blog_posts_by_tag, parse_content_timestamp,
    recent_blog_posts, search_blog_posts, valid_certificates, DEFAULT_RECENT_LIMIT,
};
