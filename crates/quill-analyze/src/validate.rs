use quill_core::{Document, Severity, ValidationIssue};

use crate::text::{strip_html, word_count};

fn error(message: &str) -> ValidationIssue {
    ValidationIssue {
        severity: Severity::Error,
        message: message.to_string(),
    }
}

fn warning(message: &str) -> ValidationIssue {
    ValidationIssue {
        severity: Severity::Warning,
        message: message.to_string(),
    }
}

/// Severity-tagged checklist for editors and audit tooling. Same thresholds
/// as the rubric, but an undersized title is an error here while an
/// oversized one only warns.
pub fn validate_requirements(doc: &Document) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let title_length = doc.seo_title().chars().count();
    if title_length < 30 {
        issues.push(error("SEO title is too short (less than 30 characters)"));
    } else if title_length > 60 {
        issues.push(warning("SEO title is too long (more than 60 characters)"));
    }

    let meta = doc.meta_description();
    if meta.is_empty() {
        issues.push(error("Meta description is missing"));
    } else if meta.chars().count() < 120 {
        issues.push(warning("Meta description is too short"));
    } else if meta.chars().count() > 160 {
        issues.push(warning("Meta description is too long"));
    }

    if !doc.has_focus_keyword() {
        issues.push(warning("No focus keyword set"));
    }

    if word_count(&strip_html(&doc.content_html)) < 300 {
        issues.push(warning(
            "Content is too short for optimal SEO (less than 300 words)",
        ));
    }

    if !doc.has_image() {
        issues.push(warning("No featured image set"));
    }

    issues
}
