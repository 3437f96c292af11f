use once_cell::sync::Lazy;
use quill_core::{HeadingAnalysis, ImageAnalysis, Link, LinkAnalysis};
use regex::Regex;
use url::Url;

use crate::text::strip_html;

const HEADING_LEVELS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

static HEADING_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    HEADING_LEVELS
        .iter()
        .map(|level| {
            Regex::new(&format!(r"(?is)<{level}[^>]*>(.*?)</{level}>")).unwrap()
        })
        .collect()
});

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)<a[^>]*href=["']([^"']*)["'][^>]*>(.*?)</a>"#).unwrap());
static IMG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<img[^>]*>").unwrap());
static ALT_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)alt=["']([^"']*)["']"#).unwrap());

/// Heading inventory over the raw HTML. Inner markup is preserved in the
/// inventory; keyword matching runs on the stripped inner text.
pub fn analyze_headings(content_html: &str, focus_keyword: &str) -> HeadingAnalysis {
    let mut by_level = std::collections::HashMap::new();
    let mut total = 0;
    let mut keyword_in_headings = 0;
    let keyword = focus_keyword.to_lowercase();

    for (level, re) in HEADING_LEVELS.iter().zip(HEADING_RES.iter()) {
        let texts: Vec<String> = re
            .captures_iter(content_html)
            .map(|c| c[1].to_string())
            .collect();
        total += texts.len();
        if !keyword.is_empty() {
            keyword_in_headings += texts
                .iter()
                .filter(|t| strip_html(t).to_lowercase().contains(&keyword))
                .count();
        }
        by_level.insert(level.to_string(), texts);
    }

    HeadingAnalysis {
        by_level,
        total,
        keyword_in_headings,
    }
}

/// Extract `<a href>` pairs and classify against the site domain. Rooted
/// paths are internal; absolute http(s) URLs are internal when their host
/// contains the site domain or localhost; anything else (mailto:, fragments)
/// counts toward the total but is left unclassified.
pub fn analyze_links(content_html: &str, site_domain: &str) -> LinkAnalysis {
    let mut internal = Vec::new();
    let mut external = Vec::new();
    let mut total = 0;

    for caps in LINK_RE.captures_iter(content_html) {
        total += 1;
        let href = caps[1].to_string();
        let link = Link {
            url: href.clone(),
            text: strip_html(&caps[2]),
        };

        if href.starts_with("http://") || href.starts_with("https://") {
            let host = Url::parse(&href)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_default();
            if host.contains(site_domain) || host.contains("localhost") {
                internal.push(link);
            } else {
                external.push(link);
            }
        } else if href.starts_with('/') {
            internal.push(link);
        }
    }

    let internal_count = internal.len();
    let external_count = external.len();
    LinkAnalysis {
        internal,
        external,
        total,
        internal_count,
        external_count,
    }
}

/// Image attribute coverage. Attribute presence is a case-insensitive
/// substring test on the tag; keyword matching needs a quoted alt value.
pub fn analyze_images(content_html: &str, focus_keyword: &str) -> ImageAnalysis {
    let keyword = focus_keyword.to_lowercase();
    let mut total = 0;
    let mut with_alt = 0;
    let mut with_title = 0;
    let mut keyword_in_alt = 0;

    for m in IMG_RE.find_iter(content_html) {
        total += 1;
        let tag = m.as_str().to_lowercase();
        if tag.contains("alt=") {
            with_alt += 1;
            if !keyword.is_empty() {
                if let Some(alt) = ALT_ATTR_RE.captures(m.as_str()) {
                    if alt[1].to_lowercase().contains(&keyword) {
                        keyword_in_alt += 1;
                    }
                }
            }
        }
        if tag.contains("title=") {
            with_title += 1;
        }
    }

    let alt_coverage_percent = if total > 0 {
        with_alt as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    ImageAnalysis {
        total,
        with_alt,
        with_title,
        keyword_in_alt,
        alt_coverage_percent,
    }
}
