//! Small text and arithmetic helpers shared by the analyzers.

use std::collections::HashMap;

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `numerator / denominator`, with the denominator floored at 1.
pub fn ratio(numerator: f64, denominator: usize) -> f64 {
    numerator / denominator.max(1) as f64
}

/// True if any needle is a substring of `haystack`.
pub fn contains_any<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_ref()))
}

/// Needles that occur in `haystack`, in needle order.
pub fn matching<'a, S: AsRef<str>>(haystack: &str, needles: &'a [S]) -> Vec<&'a str> {
    needles
        .iter()
        .map(AsRef::as_ref)
        .filter(|n| haystack.contains(n))
        .collect()
}

/// Lowercased word with surrounding punctuation removed ("Lideré," -> "lideré").
pub fn normalize_token(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}

/// Ranks terms by frequency. Ties keep first-seen order.
pub fn rank_by_frequency<I>(terms: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for term in terms {
        match index.get(&term) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(term.clone(), counts.len());
                counts.push((term, 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in insertion order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(limit).map(|(t, _)| t).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1_rounds_half_up() {
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(12.36), 12.4);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_ratio_floors_denominator() {
        assert_eq!(ratio(0.0, 0), 0.0);
        assert_eq!(ratio(5.0, 0), 5.0);
        assert_eq!(ratio(6.0, 3), 2.0);
    }

    #[test]
    fn test_normalize_token_strips_punctuation() {
        assert_eq!(normalize_token("Lideré,"), "lideré");
        assert_eq!(normalize_token("(Python)"), "python");
        assert_eq!(normalize_token("..."), "");
    }

    #[test]
    fn test_rank_by_frequency_ties_keep_first_seen() {
        let terms = ["rust", "go", "go", "java", "rust", "sql"]
            .iter()
            .map(|s| s.to_string());
        let ranked = rank_by_frequency(terms, 3);
        assert_eq!(ranked, vec!["rust", "go", "java"]);
    }

    #[test]
    fn test_matching_keeps_needle_order() {
        let needles = ["docker", "aws", "python"];
        assert_eq!(matching("python y aws", &needles), vec!["aws", "python"]);
        assert!(contains_any("python y aws", &needles));
        assert!(!contains_any("nada", &needles));
    }
}
