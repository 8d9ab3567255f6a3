use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::CompiledLexicon;
use crate::nlp::{PartOfSpeech, TaggedToken};
use crate::text::rank_by_frequency;

pub const TAGGED_LIMIT: usize = 25;
pub const FALLBACK_LIMIT: usize = 15;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

fn is_noun(pos: PartOfSpeech) -> bool {
    matches!(pos, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
}

/// Nouns/proper nouns plus (noun|adjective, noun|proper noun) bigrams, ranked,
/// with generic terms removed after the cut.
pub fn tagged_keywords(tokens: &[TaggedToken], lexicon: &CompiledLexicon) -> Vec<String> {
    let singles = tokens
        .iter()
        .filter(|t| is_noun(t.pos) && !t.is_stop && t.text.chars().count() > 3)
        .map(|t| t.lemma.clone());

    let bigrams = tokens.windows(2).filter_map(|pair| {
        let (first, second) = (&pair[0], &pair[1]);
        let leading = matches!(first.pos, PartOfSpeech::Noun | PartOfSpeech::Adjective);
        (leading && is_noun(second.pos) && !first.is_stop && !second.is_stop)
            .then(|| format!("{} {}", first.text, second.text))
    });

    let ranked = rank_by_frequency(singles.chain(bigrams).collect::<Vec<_>>(), TAGGED_LIMIT);
    ranked
        .into_iter()
        .filter(|k| !lexicon.tables.generic_keyword_terms.contains(k))
        .collect()
}

/// Regex tokenization for when no tagger is available.
pub fn fallback_keywords(job_text: &str, lexicon: &CompiledLexicon) -> Vec<String> {
    let lower = job_text.to_lowercase();
    let cleaned = NON_WORD_RE.replace_all(&lower, " ");
    let stop_words = &lexicon.tables.keyword_stop_words;

    let tokens = lexicon
        .patterns
        .keyword_token
        .find_iter(&cleaned)
        .map(|m| m.as_str().to_string())
        .filter(|t| !stop_words.contains(t))
        .collect::<Vec<_>>();

    rank_by_frequency(tokens, FALLBACK_LIMIT)
}
