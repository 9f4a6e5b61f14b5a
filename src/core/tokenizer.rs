//! Word tokenizer
//!
//! Extracts Russian words from raw text. A token is a run of Cyrillic
//! letters (`а-я`, `ё`, either case) bounded by Unicode word boundaries,
//! folded to lower case. Everything else (digits, punctuation, Latin or
//! other scripts) is dropped without complaint.
//!
//! Usage:
//! ```rust
//! use lexitally::core::tokenizer::tokenize;
//!
//! let words: Vec<String> = tokenize("Привет привет мир! 123").collect();
//! assert_eq!(words, ["привет", "привет", "мир"]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

// Unicode-aware `\b`: a Cyrillic run glued to digits or Latin letters is not a word.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[а-яёА-ЯЁ]+\b").expect("word pattern is valid"));

/// Lazily yield the lower-cased words found in `text`.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD_RE.find_iter(text).map(|m| m.as_str().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        tokenize(text).collect()
    }

    #[test]
    fn test_empty_text() {
        assert!(words("").is_empty());
    }

    #[test]
    fn test_only_non_target_characters() {
        assert!(words("123 4.5 -- !!! ???").is_empty());
        assert!(words("hello world, 42").is_empty());
        assert!(words("你好 世界 γειά").is_empty());
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(words("Слово слово СЛОВО"), ["слово", "слово", "слово"]);
    }

    #[test]
    fn test_yo_is_part_of_alphabet() {
        assert_eq!(words("Ёлка и пёс"), ["ёлка", "и", "пёс"]);
    }

    #[test]
    fn test_punctuation_separates_words() {
        assert_eq!(
            words("Привет, мир! Как-то так..."),
            ["привет", "мир", "как", "то", "так"]
        );
    }

    #[test]
    fn test_mixed_runs_are_not_words() {
        // No word boundary between the Cyrillic run and the trailing characters.
        assert!(words("слово1 словоabc abcслово").is_empty());
        assert_eq!(words("слово 1"), ["слово"]);
    }

    #[test]
    fn test_end_to_end_sample() {
        assert_eq!(words("Привет привет мир! 123"), ["привет", "привет", "мир"]);
    }

    #[test]
    fn test_is_lazy() {
        let mut iter = tokenize("один два три");
        assert_eq!(iter.next().as_deref(), Some("один"));
        assert_eq!(iter.next().as_deref(), Some("два"));
    }
}
