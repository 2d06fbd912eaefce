//! Word frequency counting
//!
//! A word is a maximal run of alphanumeric characters, lower-cased.
//! Everything else (apostrophes and hyphens included) separates words.
//!
//! "Alphanumeric" is the Unicode `Alphabetic` or `Numeric` property, so
//! combining vowel signs (e.g. Devanagari U+093F) stay inside a word.

use std::collections::BTreeMap;

/// Word → occurrence count, iterated in ascending word order
pub type WordCounts = BTreeMap<String, usize>;

/// Count every alphanumeric run in `text`
pub fn count_words(text: &str) -> WordCounts {
    let mut counts = WordCounts::new();
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            word.extend(ch.to_lowercase());
        } else if !word.is_empty() {
            *counts.entry(std::mem::take(&mut word)).or_insert(0) += 1;
        }
    }

    if !word.is_empty() {
        *counts.entry(word).or_insert(0) += 1;
    }

    counts
}
