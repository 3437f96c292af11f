use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A post as seen by the analyzer. Optional SEO fields model "unset" as an
/// empty string, matching the editor form they come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub content_html: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub seo_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub focus_keyword: String,
    #[serde(default)]
    pub og_title: String,
    #[serde(default)]
    pub og_description: String,
    #[serde(default)]
    pub twitter_title: String,
    #[serde(default)]
    pub twitter_description: String,
    #[serde(default)]
    pub canonical_url: String,
    #[serde(default)]
    pub noindex: bool,
    #[serde(default)]
    pub nofollow: bool,
    #[serde(default)]
    pub featured_image_url: Option<String>,
    #[serde(default)]
    pub og_image_url: Option<String>,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_username: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Document {
    /// SEO title, falling back to the post title.
    pub fn seo_title(&self) -> &str {
        if self.seo_title.is_empty() {
            &self.title
        } else {
            &self.seo_title
        }
    }

    /// Meta description, falling back to the excerpt.
    pub fn meta_description(&self) -> &str {
        if self.meta_description.is_empty() {
            &self.excerpt
        } else {
            &self.meta_description
        }
    }

    pub fn og_title(&self) -> &str {
        if self.og_title.is_empty() {
            self.seo_title()
        } else {
            &self.og_title
        }
    }

    pub fn og_description(&self) -> &str {
        if self.og_description.is_empty() {
            self.meta_description()
        } else {
            &self.og_description
        }
    }

    pub fn og_image_url(&self) -> Option<&str> {
        self.og_image_url
            .as_deref()
            .or(self.featured_image_url.as_deref())
    }

    pub fn twitter_title(&self) -> &str {
        if self.twitter_title.is_empty() {
            self.seo_title()
        } else {
            &self.twitter_title
        }
    }

    pub fn twitter_description(&self) -> &str {
        if self.twitter_description.is_empty() {
            self.meta_description()
        } else {
            &self.twitter_description
        }
    }

    pub fn has_image(&self) -> bool {
        self.featured_image_url.is_some() || self.og_image_url.is_some()
    }

    pub fn has_focus_keyword(&self) -> bool {
        !self.focus_keyword.is_empty()
    }
}

/// Site-wide constants the analyzer needs. Passed in explicitly rather than
/// read from ambient settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub domain: String,
    pub name: String,
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            domain: "localhost".to_string(),
            name: "Quill".to_string(),
            base_url: "http://localhost".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicStats {
    pub word_count: usize,
    pub character_count: usize,
    pub paragraph_count: usize,
    pub sentence_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub focus_keyword: String,
    pub density_percent: f64,
    pub count_in_content: usize,
    pub in_title: bool,
    pub in_headings: usize,
    pub optimal_density: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingLevel {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryDifficult,
    Unknown,
}

impl ReadingLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ReadingLevel::VeryEasy => "Very Easy",
            ReadingLevel::Easy => "Easy",
            ReadingLevel::FairlyEasy => "Fairly Easy",
            ReadingLevel::Standard => "Standard",
            ReadingLevel::FairlyDifficult => "Fairly Difficult",
            ReadingLevel::Difficult => "Difficult",
            ReadingLevel::VeryDifficult => "Very Difficult",
            ReadingLevel::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Readability {
    pub flesch_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub level: ReadingLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingAnalysis {
    /// Heading texts keyed "h1".."h6", markup preserved as authored.
    pub by_level: HashMap<String, Vec<String>>,
    pub total: usize,
    pub keyword_in_headings: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkAnalysis {
    pub internal: Vec<Link>,
    pub external: Vec<Link>,
    pub total: usize,
    pub internal_count: usize,
    pub external_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub total: usize,
    pub with_alt: usize,
    pub with_title: usize,
    pub keyword_in_alt: usize,
    pub alt_coverage_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoReport {
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub good_practices: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u32,
    pub basic: BasicStats,
    pub keyword: KeywordAnalysis,
    pub readability: Readability,
    pub headings: HeadingAnalysis,
    pub links: LinkAnalysis,
    pub images: ImageAnalysis,
    pub report: SeoReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
}
