pub mod schema;
pub mod tags;

/// Join a possibly-relative URL onto the site base. Already-absolute URLs
/// pass through.
pub(crate) fn absolute_url(base_url: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{}{}", base_url.trim_end_matches('/'), url)
    }
}

/// Absolute permalink for a post under the site's blog prefix.
pub fn post_url(doc: &quill_core::Document, base_url: &str) -> String {
    format!("{}/blog/{}/", base_url.trim_end_matches('/'), doc.slug)
}
