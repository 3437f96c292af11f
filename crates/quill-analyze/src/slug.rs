/// Lowercase the text, keep alphanumerics and underscores, collapse
/// whitespace and hyphen runs into single hyphens, trim the ends.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
    }
    out
}

/// Slug candidates for a title: the base slug, a numbered variant when the
/// base collides with an existing slug, and a shortened three-word variant
/// for long titles.
pub fn slug_suggestions(title: &str, existing: &[String]) -> Vec<String> {
    let base = slugify(title);
    let mut suggestions = vec![base.clone()];

    if existing.iter().any(|s| *s == base) {
        let mut counter = 1;
        while existing.iter().any(|s| *s == format!("{}-{}", base, counter)) {
            counter += 1;
        }
        suggestions.push(format!("{}-{}", base, counter));
    }

    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() > 3 {
        let short = slugify(&words[..3].join(" "));
        if !suggestions.contains(&short) {
            suggestions.push(short);
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basics() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust --- Ownership  "), "rust-ownership");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn suggestions_include_numbered_variant_on_collision() {
        let existing = vec!["my-post".to_string(), "my-post-1".to_string()];
        let s = slug_suggestions("My Post", &existing);
        assert_eq!(s, vec!["my-post".to_string(), "my-post-2".to_string()]);
    }

    #[test]
    fn long_titles_get_a_short_variant() {
        let s = slug_suggestions("A Very Long Title About Rust", &[]);
        assert_eq!(
            s,
            vec![
                "a-very-long-title-about-rust".to_string(),
                "a-very-long".to_string()
            ]
        );
    }
}
