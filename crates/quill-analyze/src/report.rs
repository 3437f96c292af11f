use quill_core::{Document, SeoReport};

use crate::keyword::keyword_density;
use crate::text::word_count;

/// Natural-language findings over the same thresholds as the score rubric.
/// Each dimension emits exactly one finding - an issue with a paired
/// recommendation, or a good-practice note - in stable order: title, meta
/// description, keyword presence, keyword in title, keyword density, content
/// length, image.
pub fn build_report(doc: &Document, plain_text: &str) -> SeoReport {
    let mut report = SeoReport::default();

    let title_length = doc.seo_title().chars().count();
    if title_length < 30 {
        report
            .issues
            .push("SEO title is too short (less than 30 characters)".to_string());
        report
            .recommendations
            .push("Consider expanding your title to 30-60 characters".to_string());
    } else if title_length > 60 {
        report
            .issues
            .push("SEO title is too long (more than 60 characters)".to_string());
        report
            .recommendations
            .push("Shorten your title to under 60 characters".to_string());
    } else {
        report
            .good_practices
            .push("SEO title length is optimal".to_string());
    }

    let meta = doc.meta_description();
    if meta.is_empty() {
        report.issues.push("Meta description is missing".to_string());
        report
            .recommendations
            .push("Add a compelling meta description (120-160 characters)".to_string());
    } else if meta.chars().count() < 120 {
        report
            .issues
            .push("Meta description is too short".to_string());
        report
            .recommendations
            .push("Expand meta description to 120-160 characters".to_string());
    } else if meta.chars().count() > 160 {
        report.issues.push("Meta description is too long".to_string());
        report
            .recommendations
            .push("Shorten meta description to under 160 characters".to_string());
    } else {
        report
            .good_practices
            .push("Meta description length is optimal".to_string());
    }

    if !doc.has_focus_keyword() {
        report.issues.push("No focus keyword set".to_string());
        report
            .recommendations
            .push("Set a focus keyword to optimize this post".to_string());
    } else {
        let kw = doc.focus_keyword.to_lowercase();
        if !doc.seo_title().to_lowercase().contains(&kw) {
            report
                .issues
                .push("Focus keyword not found in title".to_string());
            report
                .recommendations
                .push("Include your focus keyword in the title".to_string());
        } else {
            report
                .good_practices
                .push("Focus keyword found in title".to_string());
        }

        let words = word_count(plain_text);
        if words > 0 {
            let density = keyword_density(plain_text, words, &doc.focus_keyword);
            if density < 0.5 {
                report
                    .issues
                    .push("Focus keyword density is too low".to_string());
                report.recommendations.push(
                    "Use your focus keyword more frequently (aim for 0.5-2.5% density)"
                        .to_string(),
                );
            } else if density > 2.5 {
                report
                    .issues
                    .push("Focus keyword density is too high (keyword stuffing)".to_string());
                report
                    .recommendations
                    .push("Reduce focus keyword usage to avoid keyword stuffing".to_string());
            } else {
                report
                    .good_practices
                    .push("Focus keyword density is optimal".to_string());
            }
        }
    }

    if word_count(plain_text) < 300 {
        report
            .issues
            .push("Content is too short for good SEO".to_string());
        report
            .recommendations
            .push("Aim for at least 300 words of quality content".to_string());
    } else {
        report
            .good_practices
            .push("Content length is good for SEO".to_string());
    }

    if !doc.has_image() {
        report.issues.push("No featured image set".to_string());
        report
            .recommendations
            .push("Add a featured image to improve social sharing".to_string());
    } else {
        report
            .good_practices
            .push("Featured image is set".to_string());
    }

    report
}
