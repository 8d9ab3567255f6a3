//! Linguistic tagger — optional part-of-speech tagging and organization
//! extraction.
//!
//! Analyzers hold an `Arc<dyn LinguisticTagger>` and treat every call as best
//! effort: an error means "no signal", never a failed analysis. The default
//! `NullTagger` reports itself unavailable, which routes keyword mining to the
//! regex fallback and leaves company/institution lists empty.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The tagger could not give a signal for this call. Callers degrade.
#[derive(Debug, Error)]
#[error("tagger '{tagger}' unavailable: {reason}")]
pub struct TaggerError {
    pub tagger: &'static str,
    pub reason: String,
}

impl TaggerError {
    pub fn new(tagger: &'static str, reason: impl Into<String>) -> Self {
        Self {
            tagger,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Adjective,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub is_stop: bool,
}

/// Capability seam for a linguistic tagger. Implementations must be cheap to
/// share across threads.
pub trait LinguisticTagger: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError>;

    /// Organization-like entity mentions, in document order.
    fn organizations(&self, text: &str) -> Result<Vec<String>, TaggerError>;
}

/// Tagger used when no linguistic backend is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTagger;

impl LinguisticTagger for NullTagger {
    fn name(&self) -> &'static str {
        "null"
    }

    fn tag(&self, _text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        Err(TaggerError::new(self.name(), "no linguistic backend installed"))
    }

    fn organizations(&self, _text: &str) -> Result<Vec<String>, TaggerError> {
        Err(TaggerError::new(self.name(), "no linguistic backend installed"))
    }
}

/// Organization mentions, or an empty list if the tagger is missing or fails.
pub fn try_extract_entities(tagger: &dyn LinguisticTagger, text: &str) -> Vec<String> {
    match tagger.organizations(text) {
        Ok(entities) => entities,
        Err(e) => {
            debug!("continuing without entities: {e}");
            Vec::new()
        }
    }
}

/// Part-of-speech tags, or `None` if the tagger is missing or fails.
pub fn try_tag(tagger: &dyn LinguisticTagger, text: &str) -> Option<Vec<TaggedToken>> {
    match tagger.tag(text) {
        Ok(tokens) => Some(tokens),
        Err(e) => {
            debug!("using keyword fallback: {e}");
            None
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! Scripted taggers for tests.

    use super::*;

    /// Tags whitespace-separated words from a fixed vocabulary and returns
    /// a fixed organization list.
    pub struct ScriptedTagger {
        pub nouns: Vec<&'static str>,
        pub adjectives: Vec<&'static str>,
        pub stop_words: Vec<&'static str>,
        pub organizations: Vec<&'static str>,
    }

    impl ScriptedTagger {
        pub fn with_organizations(organizations: Vec<&'static str>) -> Self {
            Self {
                nouns: vec![],
                adjectives: vec![],
                stop_words: vec![],
                organizations,
            }
        }
    }

    impl LinguisticTagger for ScriptedTagger {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
            Ok(text
                .split_whitespace()
                .map(|word| {
                    let clean = crate::text::normalize_token(word);
                    let pos = if self.nouns.contains(&clean.as_str()) {
                        PartOfSpeech::Noun
                    } else if self.adjectives.contains(&clean.as_str()) {
                        PartOfSpeech::Adjective
                    } else {
                        PartOfSpeech::Other
                    };
                    TaggedToken {
                        is_stop: self.stop_words.contains(&clean.as_str()),
                        lemma: clean.clone(),
                        text: clean,
                        pos,
                    }
                })
                .collect())
        }

        fn organizations(&self, _text: &str) -> Result<Vec<String>, TaggerError> {
            Ok(self.organizations.iter().map(|s| s.to_string()).collect())
        }
    }

    /// Always fails, like a backend whose model failed to load.
    pub struct BrokenTagger;

    impl LinguisticTagger for BrokenTagger {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn tag(&self, _text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
            Err(TaggerError::new(self.name(), "model not loaded"))
        }

        fn organizations(&self, _text: &str) -> Result<Vec<String>, TaggerError> {
            Err(TaggerError::new(self.name(), "model not loaded"))
        }
    }
}
