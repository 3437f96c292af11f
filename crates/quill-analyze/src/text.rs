use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Remove every `<...>` span from the input. Non-greedy tag scanning, no
/// entity decoding; malformed markup passes through untouched.
pub fn strip_html(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

/// Blank-line separated segments, empties included.
pub fn paragraph_count(text: &str) -> usize {
    text.split("\n\n").count()
}

/// Segments produced by splitting on runs of sentence terminators. A trailing
/// terminator yields an empty final segment that still counts; downstream
/// consumers that need a cleaner figure filter for themselves.
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_RE.split(text).count()
}

/// Estimated reading time at 200 words per minute, floored at one minute.
pub fn reading_time_minutes(text: &str) -> usize {
    let words = word_count(text);
    std::cmp::max(1, words.div_ceil(200))
}

pub fn reading_time_display(minutes: usize) -> String {
    if minutes == 1 {
        "1 min read".to_string()
    } else {
        format!("{} min read", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_verbatim() {
        assert_eq!(strip_html("<p>A <b>bold</b> word</p>"), "A bold word");
        assert_eq!(word_count(&strip_html("<p>A <b>bold</b> word</p>")), 3);
    }

    #[test]
    fn tolerates_malformed_markup() {
        // an unterminated tag never matches, so it passes through as text
        assert_eq!(
            strip_html("a <b unclosed attr='x' b"),
            "a <b unclosed attr='x' b"
        );
        assert_eq!(strip_html("a <b>half</b> closed <i"), "a half closed <i");
        assert_eq!(strip_html("plain text"), "plain text");
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn does_not_decode_entities() {
        assert_eq!(strip_html("<p>fish &amp; chips</p>"), "fish &amp; chips");
    }

    #[test]
    fn counts_words_and_characters() {
        assert_eq!(word_count("  one\ttwo\nthree  "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(character_count("héllo"), 5);
    }

    #[test]
    fn counts_paragraphs_and_sentences() {
        assert_eq!(paragraph_count("one\n\ntwo\n\nthree"), 3);
        assert_eq!(paragraph_count("single"), 1);
        // split semantics: trailing terminator leaves an empty segment
        assert_eq!(sentence_count("One. Two! Three?"), 4);
        assert_eq!(sentence_count("no terminator"), 1);
    }

    #[test]
    fn reading_time_floors_at_one_minute() {
        assert_eq!(reading_time_minutes("a few words"), 1);
        let long = "word ".repeat(450);
        assert_eq!(reading_time_minutes(&long), 3);
        assert_eq!(reading_time_display(1), "1 min read");
        assert_eq!(reading_time_display(3), "3 min read");
    }
}
