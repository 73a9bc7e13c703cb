//! Vowel-word tokenizer
//!
//! Turns raw text into the ordered, deduplicated list of words made only of
//! vowels. The pipeline is:
//! - split on a fixed delimiter set, dropping empty fragments
//! - strip every character that is not an ASCII letter
//! - drop fragments that became empty
//! - keep fragments whose letters are all vowels (case-insensitive)
//! - keep the first occurrence of each exact (case-sensitive) word
//!
//! Usage:
//! ```rust
//! use vowelscan::core::tokenizer::extract_unique_vowel_words;
//!
//! let words = extract_unique_vowel_words("aei o u aeiou uoiea bcd");
//! assert_eq!(words, vec!["aei", "o", "u", "aeiou", "uoiea"]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Characters that separate tokens
pub const DELIMITERS: [char; 14] = [
    ' ', '\t', '\n', '\r', ',', '.', '!', '?', '|', '(', ')', '$', '=', '-',
];

static DELIMITER_RE: Lazy<Regex> = Lazy::new(|| {
    let class: String = DELIMITERS.iter().collect();
    Regex::new(&format!("[{}]+", regex::escape(&class))).expect("delimiter pattern is valid")
});

/// Counts of items surviving each stage of the pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStats {
    /// Non-empty fragments after splitting
    pub tokens: usize,
    /// Fragments still non-empty after stripping non-letters
    pub cleaned: usize,
    /// Cleaned fragments made only of vowels (duplicates included)
    pub vowel_words: usize,
    /// Distinct vowel words
    pub unique: usize,
}

/// Split text on the delimiter set, skipping empty fragments
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    DELIMITER_RE.split(text).filter(|t| !t.is_empty())
}

/// Strip everything except `A-Z` and `a-z`
pub fn clean_token(token: &str) -> String {
    token.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// A vowel word is non-empty and consists of vowels only
pub fn is_vowel_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_vowel)
}

/// Extract the unique vowel words of `text` in first-seen order
#[allow(dead_code)]
pub fn extract_unique_vowel_words(text: &str) -> Vec<String> {
    analyze(text).0
}

/// Run the full pipeline, also reporting per-stage counts
pub fn analyze(text: &str) -> (Vec<String>, TokenStats) {
    let mut stats = TokenStats::default();
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for token in tokens(text) {
        stats.tokens += 1;

        let cleaned = clean_token(token);
        if cleaned.is_empty() {
            continue;
        }
        stats.cleaned += 1;

        if !is_vowel_word(&cleaned) {
            continue;
        }
        stats.vowel_words += 1;

        if seen.insert(cleaned.clone()) {
            words.push(cleaned);
        }
    }

    stats.unique = words.len();
    (words, stats)
}
