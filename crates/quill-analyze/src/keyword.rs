use quill_core::{Document, KeywordAnalysis};

/// Non-overlapping substring occurrences of the lowercased keyword in the
/// lowercased text. Partial-word matches count; the score rubric is
/// calibrated against this, not token-boundary matching.
pub fn keyword_occurrences(plain_text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    plain_text
        .to_lowercase()
        .matches(&keyword.to_lowercase())
        .count()
}

/// Occurrences per hundred words. Zero when there is no keyword or no words.
pub fn keyword_density(plain_text: &str, word_count: usize, keyword: &str) -> f64 {
    if keyword.is_empty() || word_count == 0 {
        return 0.0;
    }
    keyword_occurrences(plain_text, keyword) as f64 / word_count as f64 * 100.0
}

pub fn keyword_in_title(doc: &Document) -> bool {
    if !doc.has_focus_keyword() {
        return false;
    }
    doc.seo_title()
        .to_lowercase()
        .contains(&doc.focus_keyword.to_lowercase())
}

pub fn analyze_keyword(
    doc: &Document,
    plain_text: &str,
    word_count: usize,
    keyword_in_headings: usize,
) -> KeywordAnalysis {
    let density = keyword_density(plain_text, word_count, &doc.focus_keyword);
    KeywordAnalysis {
        focus_keyword: doc.focus_keyword.clone(),
        density_percent: (density * 100.0).round() / 100.0,
        count_in_content: keyword_occurrences(plain_text, &doc.focus_keyword),
        in_title: keyword_in_title(doc),
        in_headings: keyword_in_headings,
        optimal_density: (0.5..=2.5).contains(&density),
    }
}
