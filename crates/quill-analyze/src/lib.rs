pub mod keyword;
pub mod readability;
pub mod report;
pub mod scoring;
pub mod slug;
pub mod structure;
pub mod text;
pub mod validate;

use quill_core::{AnalysisResult, BasicStats, Document, SiteConfig};
use tracing::debug;

/// One analysis pass over a document. The HTML is stripped once on
/// construction and every analyzer works from the same views, so all counts
/// agree. Holds no mutable state; `analyze` may be called repeatedly and
/// from any thread.
pub struct SeoAnalyzer<'a> {
    site: &'a SiteConfig,
    doc: &'a Document,
    plain_text: String,
    word_count: usize,
}

impl<'a> SeoAnalyzer<'a> {
    pub fn new(site: &'a SiteConfig, doc: &'a Document) -> Self {
        let plain_text = text::strip_html(&doc.content_html);
        let word_count = text::word_count(&plain_text);
        Self {
            site,
            doc,
            plain_text,
            word_count,
        }
    }

    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn reading_time_minutes(&self) -> usize {
        text::reading_time_minutes(&self.plain_text)
    }

    pub fn analyze(&self) -> AnalysisResult {
        let basic = BasicStats {
            word_count: self.word_count,
            character_count: text::character_count(&self.plain_text),
            paragraph_count: text::paragraph_count(&self.plain_text),
            sentence_count: text::sentence_count(&self.plain_text),
        };

        let headings = structure::analyze_headings(&self.doc.content_html, &self.doc.focus_keyword);
        let links = structure::analyze_links(&self.doc.content_html, &self.site.domain);
        let images = structure::analyze_images(&self.doc.content_html, &self.doc.focus_keyword);
        let keyword = keyword::analyze_keyword(
            self.doc,
            &self.plain_text,
            self.word_count,
            headings.keyword_in_headings,
        );
        let readability = readability::analyze_readability(&self.plain_text);
        let score = scoring::compute_seo_score(self.doc, &self.plain_text);
        let report = report::build_report(self.doc, &self.plain_text);

        debug!(
            slug = %self.doc.slug,
            score,
            words = self.word_count,
            "document analyzed"
        );

        AnalysisResult {
            score,
            basic,
            keyword,
            readability,
            headings,
            links,
            images,
            report,
        }
    }
}
