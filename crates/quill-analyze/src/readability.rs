use once_cell::sync::Lazy;
use quill_core::{Readability, ReadingLevel};
use regex::Regex;

static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Flesch reading ease and Flesch-Kincaid grade over plain text. Degenerate
/// input collapses to a neutral result instead of an error.
pub fn analyze_readability(text: &str) -> Readability {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Readability {
            flesch_ease: 0.0,
            flesch_kincaid_grade: 0.0,
            level: ReadingLevel::Unknown,
        };
    }

    let sentences = SENTENCE_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    let ease = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;

    Readability {
        flesch_ease: round1(ease),
        flesch_kincaid_grade: round1(grade),
        level: level_for(ease),
    }
}

fn level_for(ease: f64) -> ReadingLevel {
    if ease >= 90.0 {
        ReadingLevel::VeryEasy
    } else if ease >= 80.0 {
        ReadingLevel::Easy
    } else if ease >= 70.0 {
        ReadingLevel::FairlyEasy
    } else if ease >= 60.0 {
        ReadingLevel::Standard
    } else if ease >= 50.0 {
        ReadingLevel::FairlyDifficult
    } else if ease >= 30.0 {
        ReadingLevel::Difficult
    } else {
        ReadingLevel::VeryDifficult
    }
}

/// Vowel-group syllable heuristic with a trailing silent-e adjustment.
/// Every word counts as at least one syllable.
fn count_syllables(word: &str) -> usize {
    let w = word
        .trim_matches(|c: char| !c.is_ascii_alphabetic())
        .to_lowercase();
    let mut count = 0;
    let mut prev_vowel = false;
    for ch in w.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = is_vowel;
    }
    if w.ends_with('e') && !w.ends_with("le") && count > 1 {
        count -= 1;
    }
    count.max(1)
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_unknown() {
        let r = analyze_readability("");
        assert_eq!(r.flesch_ease, 0.0);
        assert_eq!(r.flesch_kincaid_grade, 0.0);
        assert_eq!(r.level, ReadingLevel::Unknown);

        let r = analyze_readability("   \n  ");
        assert_eq!(r.level, ReadingLevel::Unknown);
    }

    #[test]
    fn syllable_heuristic() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("window"), 2);
        assert_eq!(count_syllables("banana"), 3);
        // silent trailing e
        assert_eq!(count_syllables("case"), 1);
        // -le keeps its syllable
        assert_eq!(count_syllables("table"), 2);
        // floor of one
        assert_eq!(count_syllables("tsk"), 1);
        // punctuation at word edges is ignored
        assert_eq!(count_syllables("shone."), 1);
    }

    #[test]
    fn short_simple_sentences_read_very_easy() {
        let r = analyze_readability("The cat sat. The dog ran. The sun shone.");
        assert!(r.flesch_ease >= 90.0, "ease was {}", r.flesch_ease);
        assert_eq!(r.level, ReadingLevel::VeryEasy);
    }

    #[test]
    fn dense_polysyllabic_prose_reads_difficult() {
        let r = analyze_readability(
            "Institutional heterogeneity necessitates comprehensive organizational \
             recalibration alongside multidimensional infrastructural considerations \
             regarding internationalization methodology and epistemological \
             characterization of administrative professionalization",
        );
        assert_eq!(r.level, ReadingLevel::VeryDifficult);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(level_for(90.0), ReadingLevel::VeryEasy);
        assert_eq!(level_for(89.9), ReadingLevel::Easy);
        assert_eq!(level_for(70.0), ReadingLevel::FairlyEasy);
        assert_eq!(level_for(60.0), ReadingLevel::Standard);
        assert_eq!(level_for(50.0), ReadingLevel::FairlyDifficult);
        assert_eq!(level_for(30.0), ReadingLevel::Difficult);
        assert_eq!(level_for(29.9), ReadingLevel::VeryDifficult);
    }

    #[test]
    fn missing_terminators_still_compute() {
        let r = analyze_readability("a run of words with no sentence terminator at all");
        assert!(r.flesch_ease != 0.0);
        assert_ne!(r.level, ReadingLevel::Unknown);
    }
}
