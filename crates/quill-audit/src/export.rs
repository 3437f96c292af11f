use crate::ScoredPost;

const HEADER: &str = "Title,URL,SEO Score,Focus Keyword,Meta Description Length,\
                      Word Count,Reading Time,Featured Image,Created Date";

/// Render posts as CSV, highest score first. Fields containing commas,
/// quotes, or newlines are quoted per RFC 4180.
pub fn export_csv(posts: &[ScoredPost]) -> String {
    let mut rows: Vec<&ScoredPost> = posts.iter().collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score));

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for post in rows {
        let fields = [
            csv_field(&post.title),
            csv_field(&post.url),
            post.score.to_string(),
            csv_field(&post.focus_keyword),
            post.meta_description_length.to_string(),
            post.word_count.to_string(),
            post.reading_time.to_string(),
            if post.has_featured_image { "Yes" } else { "No" }.to_string(),
            post.created_at
                .map(|ts| ts.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(title: &str, score: u32) -> ScoredPost {
        ScoredPost {
            title: title.to_string(),
            url: "/blog/p/".to_string(),
            score,
            focus_keyword: "kw".to_string(),
            meta_description: String::new(),
            meta_description_length: 0,
            word_count: 100,
            reading_time: 1,
            has_featured_image: true,
            created_at: Some(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn rows_are_ordered_by_descending_score() {
        let csv = export_csv(&[post("low", 10), post("high", 90)]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Title,URL,SEO Score"));
        assert!(lines[1].starts_with("high,"));
        assert!(lines[2].starts_with("low,"));
    }

    #[test]
    fn fields_with_commas_and_quotes_are_escaped() {
        let csv = export_csv(&[post("Hello, \"World\"", 50)]);
        assert!(csv.contains("\"Hello, \"\"World\"\"\","));
    }

    #[test]
    fn row_shape() {
        let csv = export_csv(&[post("Plain", 77)]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "Plain,/blog/p/,77,kw,0,100,1,Yes,2026-03-01");
    }
}
