use crate::extraction::quality::{count_listed_words, sentences};
use crate::improvement::models::ContentAnalysis;
use crate::lexicon::Lexicon;
use crate::text::{ratio, round1};

/// Single-word entries are matched per token; phrases by occurrence in the
/// lowercased text.
fn count_weak_words(text_lower: &str, words: &[&str], weak_words: &[String]) -> usize {
    let (phrases, singles): (Vec<String>, Vec<String>) =
        weak_words.iter().cloned().partition(|w| w.contains(' '));
    let phrase_hits: usize = phrases.iter().map(|p| text_lower.matches(p.as_str()).count()).sum();
    count_listed_words(words, &singles) + phrase_hits
}

fn sentence_band(avg: f64) -> f64 {
    if (10.0..=25.0).contains(&avg) {
        30.0
    } else if (5.0..10.0).contains(&avg) || (avg > 25.0 && avg <= 35.0) {
        15.0
    } else {
        5.0
    }
}

pub fn analyze_content(text: &str, lexicon: &Lexicon) -> ContentAnalysis {
    let lower = text.to_lowercase();
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentences = sentences(text);

    let action_verbs_count = count_listed_words(&words, &lexicon.action_verbs);
    let weak_words_count = count_weak_words(&lower, &words, &lexicon.weak_words);
    let keyword_density = count_listed_words(&words, &lexicon.professional_keywords);

    let sentence_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    let avg_sentence_length = ratio(sentence_words as f64, sentences.len());

    let verbs = ((action_verbs_count as f64 * 3.0).min(30.0)
        - (weak_words_count as f64 * 2.0).min(20.0))
    .max(0.0);
    let score = (verbs
        + sentence_band(avg_sentence_length)
        + (keyword_density as f64 * 4.0).min(20.0))
    .min(100.0);

    ContentAnalysis {
        action_verbs_count,
        weak_words_count,
        sentence_count: sentences.len(),
        avg_sentence_length: round1(avg_sentence_length),
        keyword_density,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_action_verbs_and_keywords() {
        let text = "Lideré la gestión del equipo con 10 personas y desarrollé la plataforma de pagos.";
        let analysis = analyze_content(text, &Lexicon::default());

        assert_eq!(analysis.action_verbs_count, 2);
        assert_eq!(analysis.keyword_density, 1);
        assert_eq!(analysis.sentence_count, 1);
        assert_eq!(analysis.avg_sentence_length, 14.0);
        // 2 × 3 + band 30 + 1 × 4
        assert_eq!(analysis.score, 40.0);
    }

    #[test]
    fn test_weak_phrases_counted_by_occurrence() {
        let text = "Participé y ayudé. Fui parte de un equipo y traté de mejorar. Tal vez.";
        let analysis = analyze_content(text, &Lexicon::default());
        assert_eq!(analysis.weak_words_count, 5);
    }

    #[test]
    fn test_weak_words_never_push_verbs_below_zero() {
        let text = "Participé, ayudé, colaboré, asistí, intenté";
        let analysis = analyze_content(text, &Lexicon::default());
        assert_eq!(analysis.weak_words_count, 5);
        // verb part floors at 0, 5-word sentence gets band 15
        assert_eq!(analysis.score, 15.0);
    }

    #[test]
    fn test_sentence_bands() {
        assert_eq!(sentence_band(0.0), 5.0);
        assert_eq!(sentence_band(5.0), 15.0);
        assert_eq!(sentence_band(10.0), 30.0);
        assert_eq!(sentence_band(25.0), 30.0);
        assert_eq!(sentence_band(30.0), 15.0);
        assert_eq!(sentence_band(35.1), 5.0);
    }

    #[test]
    fn test_empty_text() {
        let analysis = analyze_content("", &Lexicon::default());
        assert_eq!(analysis.sentence_count, 0);
        assert_eq!(analysis.avg_sentence_length, 0.0);
        assert_eq!(analysis.score, 5.0);
    }
}
