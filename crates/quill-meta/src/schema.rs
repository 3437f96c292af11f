use quill_core::{Document, SiteConfig};
use serde_json::{json, Value};

use crate::tags::author_display;
use crate::{absolute_url, post_url};

/// schema.org Article JSON-LD for a post.
pub fn article_schema(doc: &Document, site: &SiteConfig) -> Value {
    let base = site.base_url.trim_end_matches('/');

    let mut images: Vec<String> = Vec::new();
    if let Some(url) = &doc.featured_image_url {
        images.push(absolute_url(&site.base_url, url));
    }
    if let Some(url) = &doc.og_image_url {
        images.push(absolute_url(&site.base_url, url));
    }

    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": doc.seo_title(),
        "description": doc.meta_description(),
        "image": images,
        "author": {
            "@type": "Person",
            "name": author_display(doc),
            "url": format!("{}/author/{}/", base, doc.author_username),
        },
        "publisher": {
            "@type": "Organization",
            "name": site.name,
            "url": site.base_url,
            "logo": {
                "@type": "ImageObject",
                "url": format!("{}/static/images/icon.png", base),
            },
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": post_url(doc, &site.base_url),
        },
    });
    let map = schema.as_object_mut().unwrap();

    if let Some(ts) = doc.published_at {
        map.insert("datePublished".to_string(), json!(ts.to_rfc3339()));
    }
    if let Some(ts) = doc.updated_at {
        map.insert("dateModified".to_string(), json!(ts.to_rfc3339()));
    }
    if let Some(category) = &doc.category {
        map.insert("articleSection".to_string(), json!(category));
    }
    if !doc.tags.is_empty() {
        map.insert("keywords".to_string(), json!(doc.tags));
    }

    schema
}

/// schema.org Organization JSON-LD for the site itself.
pub fn organization_schema(site: &SiteConfig) -> Value {
    let base = site.base_url.trim_end_matches('/');
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": site.name,
        "url": site.base_url,
        "logo": format!("{}/static/images/icon.png", base),
        "sameAs": [],
    })
}

/// schema.org BreadcrumbList from (name, url) pairs, root first.
pub fn breadcrumb_schema(breadcrumbs: &[(String, String)], site: &SiteConfig) -> Value {
    let items: Vec<Value> = breadcrumbs
        .iter()
        .enumerate()
        .map(|(index, (name, url))| {
            let item = if url.starts_with('/') {
                absolute_url(&site.base_url, url)
            } else {
                url.clone()
            };
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": item,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}
