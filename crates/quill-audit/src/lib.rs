pub mod export;
pub mod summary;

use chrono::{DateTime, Utc};
use quill_analyze::SeoAnalyzer;
use quill_core::{Document, SiteConfig};
use serde::Serialize;

/// One post reduced to the fields the audit and export care about.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPost {
    pub title: String,
    pub url: String,
    pub score: u32,
    pub focus_keyword: String,
    /// Raw field, no excerpt fallback; coverage and duplicate counts look
    /// at what editors actually filled in.
    pub meta_description: String,
    /// Fallback-resolved length, the figure the CSV export reports.
    pub meta_description_length: usize,
    pub word_count: usize,
    pub reading_time: usize,
    pub has_featured_image: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Run the analyzer over every document. A plain fold; each document is
/// scored independently.
pub fn score_posts(site: &SiteConfig, docs: &[Document]) -> Vec<ScoredPost> {
    docs.iter()
        .map(|doc| {
            let analyzer = SeoAnalyzer::new(site, doc);
            let result = analyzer.analyze();
            ScoredPost {
                title: doc.title.clone(),
                url: format!("/blog/{}/", doc.slug),
                score: result.score,
                focus_keyword: doc.focus_keyword.clone(),
                meta_description: doc.meta_description.clone(),
                meta_description_length: doc.meta_description().chars().count(),
                word_count: analyzer.word_count(),
                reading_time: analyzer.reading_time_minutes(),
                has_featured_image: doc.featured_image_url.is_some(),
                created_at: doc.published_at,
            }
        })
        .collect()
}
