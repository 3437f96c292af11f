use quill_core::{Document, SiteConfig};
use serde_json::{json, Value};

use crate::{absolute_url, post_url};

/// Basic head tags: title, description, keywords, canonical, robots.
pub fn basic_meta(doc: &Document, site: &SiteConfig) -> Value {
    let canonical = if doc.canonical_url.is_empty() {
        post_url(doc, &site.base_url)
    } else {
        doc.canonical_url.clone()
    };
    let robots = if doc.noindex || doc.nofollow {
        "noindex, nofollow"
    } else {
        "index, follow"
    };

    json!({
        "title": doc.seo_title(),
        "description": doc.meta_description(),
        "keywords": doc.tags.join(", "),
        "canonical": canonical,
        "robots": robots,
    })
}

/// Open Graph tags, with the article:* extensions the crawlers read.
pub fn og_meta(doc: &Document, site: &SiteConfig) -> Value {
    let mut tags = json!({
        "og:title": doc.og_title(),
        "og:description": doc.og_description(),
        "og:type": "article",
        "og:url": post_url(doc, &site.base_url),
        "og:site_name": site.name,
        "article:author": author_display(doc),
        "article:section": doc.category.clone().unwrap_or_default(),
    });
    let map = tags.as_object_mut().unwrap();

    if let Some(ts) = doc.published_at {
        map.insert("article:published_time".to_string(), json!(ts.to_rfc3339()));
    }
    if let Some(ts) = doc.updated_at {
        map.insert("article:modified_time".to_string(), json!(ts.to_rfc3339()));
    }
    if let Some(image) = doc.og_image_url() {
        map.insert(
            "og:image".to_string(),
            json!(absolute_url(&site.base_url, image)),
        );
        map.insert("og:image:width".to_string(), json!("1200"));
        map.insert("og:image:height".to_string(), json!("630"));
    }
    if !doc.tags.is_empty() {
        map.insert("article:tag".to_string(), json!(doc.tags));
    }

    tags
}

/// Twitter Card tags.
pub fn twitter_meta(doc: &Document, site: &SiteConfig) -> Value {
    let mut tags = json!({
        "twitter:card": "summary_large_image",
        "twitter:title": doc.twitter_title(),
        "twitter:description": doc.twitter_description(),
        "twitter:site": site.name,
        "twitter:creator": format!("@{}", doc.author_username),
    });

    if let Some(image) = doc.og_image_url() {
        tags.as_object_mut().unwrap().insert(
            "twitter:image".to_string(),
            json!(absolute_url(&site.base_url, image)),
        );
    }

    tags
}

pub(crate) fn author_display(doc: &Document) -> String {
    if doc.author_name.is_empty() {
        doc.author_username.clone()
    } else {
        doc.author_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            domain: "example.com".to_string(),
            name: "Example".to_string(),
            base_url: "https://example.com".to_string(),
        }
    }

    fn doc() -> Document {
        Document {
            title: "Post Title".to_string(),
            slug: "post-title".to_string(),
            excerpt: "A short excerpt.".to_string(),
            tags: vec!["rust".to_string(), "seo".to_string()],
            author_name: "Jane Doe".to_string(),
            author_username: "jane".to_string(),
            featured_image_url: Some("/media/cover.png".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn basic_meta_falls_back_and_builds_canonical() {
        let meta = basic_meta(&doc(), &site());
        assert_eq!(meta["title"], "Post Title");
        assert_eq!(meta["description"], "A short excerpt.");
        assert_eq!(meta["keywords"], "rust, seo");
        assert_eq!(meta["canonical"], "https://example.com/blog/post-title/");
        assert_eq!(meta["robots"], "index, follow");
    }

    #[test]
    fn explicit_canonical_and_noindex_win() {
        let mut d = doc();
        d.canonical_url = "https://elsewhere.net/p".to_string();
        d.noindex = true;
        let meta = basic_meta(&d, &site());
        assert_eq!(meta["canonical"], "https://elsewhere.net/p");
        assert_eq!(meta["robots"], "noindex, nofollow");
    }

    #[test]
    fn og_meta_uses_fallback_chain_and_image() {
        let meta = og_meta(&doc(), &site());
        // og:title falls back through seo_title() to the post title
        assert_eq!(meta["og:title"], "Post Title");
        assert_eq!(meta["og:image"], "https://example.com/media/cover.png");
        assert_eq!(meta["og:image:width"], "1200");
        assert_eq!(meta["article:author"], "Jane Doe");
        assert_eq!(meta["article:tag"], json!(["rust", "seo"]));
    }

    #[test]
    fn og_image_prefers_the_dedicated_og_asset() {
        let mut d = doc();
        d.og_image_url = Some("https://cdn.example.com/og.png".to_string());
        let meta = og_meta(&d, &site());
        assert_eq!(meta["og:image"], "https://cdn.example.com/og.png");
    }

    #[test]
    fn twitter_meta_shape() {
        let meta = twitter_meta(&doc(), &site());
        assert_eq!(meta["twitter:card"], "summary_large_image");
        assert_eq!(meta["twitter:title"], "Post Title");
        assert_eq!(meta["twitter:creator"], "@jane");
        assert_eq!(meta["twitter:image"], "https://example.com/media/cover.png");
    }

    #[test]
    fn missing_image_omits_the_tag() {
        let mut d = doc();
        d.featured_image_url = None;
        let meta = og_meta(&d, &site());
        assert!(meta.get("og:image").is_none());
        let meta = twitter_meta(&d, &site());
        assert!(meta.get("twitter:image").is_none());
    }
}
