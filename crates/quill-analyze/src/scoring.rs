use once_cell::sync::Lazy;
use quill_core::Document;
use regex::Regex;

use crate::keyword::keyword_density;
use crate::text::word_count;

static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<a[^>]*>").unwrap());

/// Additive 0-100 rubric over a document and its stripped text.
///
/// | factor | points |
/// |---|---|
/// | SEO title length       | 20 (fallback title: 15) |
/// | meta description length| 20 |
/// | keyword in title       | 15 |
/// | keyword density        | 15 (present but off-band: 8) |
/// | featured/OG image      | 10 |
/// | content length         | 10 |
/// | keyword in slug        | 5 |
/// | link count             | 5 |
pub fn compute_seo_score(doc: &Document, plain_text: &str) -> u32 {
    let mut score = 0u32;

    // SEO title: 30-60 chars is the target band. Posts without an explicit
    // SEO title earn a reduced award on the plain title.
    if !doc.seo_title.is_empty() {
        let len = doc.seo_title.chars().count();
        if (30..=60).contains(&len) {
            score += 20;
        } else if len < 30 {
            score += 10;
        }
    } else if (30..=60).contains(&doc.title.chars().count()) {
        score += 15;
    }

    // Meta description: 120-160 chars.
    if !doc.meta_description.is_empty() {
        let len = doc.meta_description.chars().count();
        if (120..=160).contains(&len) {
            score += 20;
        } else if len < 120 {
            score += 10;
        }
    }

    // Focus keyword in title, the plain title checked before the SEO title.
    if doc.has_focus_keyword() {
        let kw = doc.focus_keyword.to_lowercase();
        if doc.title.to_lowercase().contains(&kw)
            || (!doc.seo_title.is_empty() && doc.seo_title.to_lowercase().contains(&kw))
        {
            score += 15;
        }
    }

    // Keyword density: [0.5, 2.5] inclusive is optimal; any nonzero
    // presence outside the band earns a partial award.
    if doc.has_focus_keyword() {
        let words = word_count(plain_text);
        if words > 0 {
            let density = keyword_density(plain_text, words, &doc.focus_keyword);
            if (0.5..=2.5).contains(&density) {
                score += 15;
            } else if density > 0.0 {
                score += 8;
            }
        }
    }

    if doc.has_image() {
        score += 10;
    }

    // Content length.
    let words = word_count(plain_text);
    if words >= 300 {
        score += 10;
    } else if words >= 150 {
        score += 5;
    }

    // Slug: keyword with spaces hyphenated must appear in the slug.
    if doc.has_focus_keyword()
        && doc
            .slug
            .contains(&doc.focus_keyword.to_lowercase().replace(' ', "-"))
    {
        score += 5;
    }

    // Links: any anchor tag counts, internal or external.
    let link_count = ANCHOR_RE.find_iter(&doc.content_html).count();
    if link_count >= 3 {
        score += 5;
    } else if link_count >= 1 {
        score += 3;
    }

    score.min(100)
}
