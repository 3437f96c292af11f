use std::collections::HashMap;

use serde::Serialize;

use crate::ScoredPost;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteSummary {
    pub total_posts: usize,
    pub average_score: f64,
    pub excellent: usize,
    pub good: usize,
    pub needs_improvement: usize,
    pub poor: usize,
    pub with_focus_keyword: usize,
    pub with_meta_description: usize,
    pub with_featured_image: usize,
    pub titles_too_short: usize,
    pub titles_too_long: usize,
    pub duplicate_titles: usize,
    pub duplicate_meta_descriptions: usize,
    pub average_word_count: usize,
    pub average_reading_time: usize,
}

/// Fold a set of scored posts into site-wide metrics. Buckets partition on
/// score: >=90 excellent, 80-89 good, 60-79 needs improvement, <60 poor.
pub fn site_summary(posts: &[ScoredPost]) -> SiteSummary {
    let mut summary = SiteSummary {
        total_posts: posts.len(),
        ..Default::default()
    };
    if posts.is_empty() {
        return summary;
    }

    let mut score_total = 0u64;
    let mut word_total = 0usize;
    let mut reading_total = 0usize;

    for post in posts {
        score_total += u64::from(post.score);
        word_total += post.word_count;
        reading_total += post.reading_time;

        match post.score {
            90..=100 => summary.excellent += 1,
            80..=89 => summary.good += 1,
            60..=79 => summary.needs_improvement += 1,
            _ => summary.poor += 1,
        }

        if !post.focus_keyword.is_empty() {
            summary.with_focus_keyword += 1;
        }
        if !post.meta_description.is_empty() {
            summary.with_meta_description += 1;
        }
        if post.has_featured_image {
            summary.with_featured_image += 1;
        }

        let title_length = post.title.chars().count();
        if title_length < 30 {
            summary.titles_too_short += 1;
        } else if title_length > 60 {
            summary.titles_too_long += 1;
        }
    }

    summary.average_score =
        (score_total as f64 / posts.len() as f64 * 10.0).round() / 10.0;
    summary.average_word_count =
        (word_total as f64 / posts.len() as f64).round() as usize;
    summary.average_reading_time =
        (reading_total as f64 / posts.len() as f64).round() as usize;
    summary.duplicate_titles = count_duplicates(posts.iter().map(|p| p.title.as_str()));
    summary.duplicate_meta_descriptions = count_duplicates(
        posts
            .iter()
            .map(|p| p.meta_description.as_str())
            .filter(|m| !m.is_empty()),
    );

    summary
}

/// Number of distinct values that appear more than once.
fn count_duplicates<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts.values().filter(|&&c| c > 1).count()
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordStats {
    pub total_keywords: usize,
    /// Most-used keywords, frequency descending then alphabetical.
    pub top: Vec<(String, usize)>,
    /// Keywords targeted by more than one post.
    pub cannibalized: Vec<(String, usize)>,
}

pub fn keyword_stats(posts: &[ScoredPost]) -> KeywordStats {
    let mut frequency: HashMap<String, usize> = HashMap::new();
    for post in posts {
        if !post.focus_keyword.is_empty() {
            *frequency
                .entry(post.focus_keyword.to_lowercase())
                .or_insert(0) += 1;
        }
    }

    let mut top: Vec<(String, usize)> = frequency.iter().map(|(k, &v)| (k.clone(), v)).collect();
    top.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    top.truncate(20);

    let mut cannibalized: Vec<(String, usize)> = frequency
        .iter()
        .filter(|(_, &v)| v > 1)
        .map(|(k, &v)| (k.clone(), v))
        .collect();
    cannibalized.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    KeywordStats {
        total_keywords: frequency.len(),
        top,
        cannibalized,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteRecommendation {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action: String,
}

/// Actionable site-level recommendations derived from the summary.
pub fn site_recommendations(summary: &SiteSummary) -> Vec<SiteRecommendation> {
    let mut recs = Vec::new();
    let missing_meta = summary.total_posts - summary.with_meta_description;
    let missing_keyword = summary.total_posts - summary.with_focus_keyword;
    let missing_image = summary.total_posts - summary.with_featured_image;

    if missing_meta > 0 {
        recs.push(SiteRecommendation {
            priority: Priority::High,
            title: "Add Meta Descriptions".to_string(),
            description: format!(
                "{} posts are missing meta descriptions. This hurts click-through rates from search results.",
                missing_meta
            ),
            action: "Add compelling meta descriptions (120-160 characters) to all posts."
                .to_string(),
        });
    }
    if missing_keyword > 0 {
        recs.push(SiteRecommendation {
            priority: Priority::Medium,
            title: "Set Focus Keywords".to_string(),
            description: format!("{} posts don't have focus keywords set.", missing_keyword),
            action: "Research and set focus keywords for better content optimization.".to_string(),
        });
    }
    if missing_image > 0 {
        recs.push(SiteRecommendation {
            priority: Priority::Medium,
            title: "Add Featured Images".to_string(),
            description: format!("{} posts are missing featured images.", missing_image),
            action: "Add relevant, optimized images to improve social sharing and engagement."
                .to_string(),
        });
    }
    if summary.duplicate_meta_descriptions > 0 {
        recs.push(SiteRecommendation {
            priority: Priority::High,
            title: "Fix Duplicate Meta Descriptions".to_string(),
            description: "Multiple posts have identical meta descriptions.".to_string(),
            action: "Make each meta description unique and specific to the post content."
                .to_string(),
        });
    }
    if summary.titles_too_short > 0 {
        recs.push(SiteRecommendation {
            priority: Priority::Medium,
            title: "Optimize Short Titles".to_string(),
            description: format!(
                "{} posts have titles shorter than 30 characters.",
                summary.titles_too_short
            ),
            action: "Expand titles to include more descriptive keywords (30-60 characters ideal)."
                .to_string(),
        });
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, score: u32, keyword: &str, meta: &str) -> ScoredPost {
        ScoredPost {
            title: title.to_string(),
            url: "/blog/x/".to_string(),
            score,
            focus_keyword: keyword.to_string(),
            meta_description: meta.to_string(),
            meta_description_length: meta.chars().count(),
            word_count: 400,
            reading_time: 2,
            has_featured_image: false,
            created_at: None,
        }
    }

    #[test]
    fn buckets_partition_the_posts() {
        let posts = vec![
            post("A Title Long Enough to Pass the Bar", 95, "a", "m"),
            post("Another Title Long Enough to Pass", 85, "b", "m2"),
            post("Yet Another Title Long Enough Too", 70, "", ""),
            post("short", 20, "", ""),
        ];
        let s = site_summary(&posts);
        assert_eq!(s.total_posts, 4);
        assert_eq!(
            (s.excellent, s.good, s.needs_improvement, s.poor),
            (1, 1, 1, 1)
        );
        assert_eq!(s.excellent + s.good + s.needs_improvement + s.poor, 4);
        assert_eq!(s.average_score, 67.5);
        assert_eq!(s.with_focus_keyword, 2);
        assert_eq!(s.with_meta_description, 2);
        assert_eq!(s.titles_too_short, 1);
    }

    #[test]
    fn empty_input_yields_zeroes_not_division_errors() {
        let s = site_summary(&[]);
        assert_eq!(s.total_posts, 0);
        assert_eq!(s.average_score, 0.0);
        assert!(site_recommendations(&s).is_empty());
    }

    #[test]
    fn duplicates_count_distinct_repeated_values() {
        let posts = vec![
            post("Same Title Repeated Across Posts!", 50, "", "meta one"),
            post("Same Title Repeated Across Posts!", 50, "", "meta one"),
            post("A Different Title for This One..", 50, "", "meta one"),
            post("Unique Fourth Title Goes Here Now", 50, "", ""),
        ];
        let s = site_summary(&posts);
        assert_eq!(s.duplicate_titles, 1);
        assert_eq!(s.duplicate_meta_descriptions, 1);
        // empty meta descriptions never count as duplicates of each other
        assert_eq!(s.with_meta_description, 3);
    }

    #[test]
    fn keyword_cannibalization() {
        let posts = vec![
            post("One Title Long Enough for Checks.", 50, "Rust", ""),
            post("Two Title Long Enough for Checks.", 50, "rust", ""),
            post("Three Title Long Enough for Check", 50, "serde", ""),
        ];
        let stats = keyword_stats(&posts);
        assert_eq!(stats.total_keywords, 2);
        assert_eq!(stats.top[0], ("rust".to_string(), 2));
        assert_eq!(stats.cannibalized, vec![("rust".to_string(), 2)]);
    }

    #[test]
    fn recommendations_track_the_gaps() {
        let posts = vec![
            post("short", 10, "", ""),
            post("An Acceptably Long Title Right Here", 80, "kw", "meta"),
        ];
        let s = site_summary(&posts);
        let recs = site_recommendations(&s);
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert!(titles.contains(&"Add Meta Descriptions"));
        assert!(titles.contains(&"Set Focus Keywords"));
        assert!(titles.contains(&"Add Featured Images"));
        assert!(titles.contains(&"Optimize Short Titles"));
        assert!(recs
            .iter()
            .find(|r| r.title == "Add Meta Descriptions")
            .is_some_and(|r| r.priority == Priority::High));
    }
}
