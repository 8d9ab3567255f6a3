use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::models::TextQuality;
use crate::text::{normalize_token, ratio, round1};

pub(crate) static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Non-empty, trimmed sentences.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Words (whitespace-separated) that appear in `listed` once punctuation is stripped.
pub fn count_listed_words(words: &[&str], listed: &[String]) -> usize {
    words
        .iter()
        .filter(|w| {
            let token = normalize_token(w);
            listed.iter().any(|v| *v == token)
        })
        .count()
}

pub fn analyze_text_quality(text: &str, action_verbs: &[String]) -> TextQuality {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = sentences(text).len();
    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let action_word_count = count_listed_words(&words, action_verbs);

    TextQuality {
        word_count: words.len(),
        sentence_count,
        avg_sentence_len: round1(ratio(words.len() as f64, sentence_count)),
        avg_word_len: round1(ratio(total_chars as f64, words.len())),
        action_word_count,
        action_word_density: round1(ratio(action_word_count as f64, words.len()) * 100.0),
    }
}
