// Fact extraction: résumé text → skills, experience, education, contact, prose quality.
// Pure functions of text + lexicon. The tagger only contributes organization names.

pub mod contact;
pub mod education;
pub mod experience;
pub mod models;
pub mod quality;
pub mod skills;

use std::sync::Arc;

use tracing::debug;

use crate::lexicon::CompiledLexicon;
use crate::nlp::{try_extract_entities, LinguisticTagger};

pub use models::ResumeFacts;

#[derive(Clone)]
pub struct FactExtractor {
    lexicon: Arc<CompiledLexicon>,
    tagger: Arc<dyn LinguisticTagger>,
}

impl FactExtractor {
    pub fn new(lexicon: Arc<CompiledLexicon>, tagger: Arc<dyn LinguisticTagger>) -> Self {
        Self { lexicon, tagger }
    }

    /// Never fails. Missing signals come back as empty sets and zeros.
    pub fn extract(&self, text: &str) -> ResumeFacts {
        let lower = text.to_lowercase();
        let tables = &self.lexicon.tables;
        let organizations = try_extract_entities(self.tagger.as_ref(), text);

        let facts = ResumeFacts {
            skills: skills::extract_skills(&lower, tables),
            experience: experience::extract_experience(text, &lower, &self.lexicon, &organizations),
            education: education::extract_education(&lower, tables, &organizations),
            contact: contact::extract_contact(text),
            text_quality: quality::analyze_text_quality(text, &tables.action_verbs),
        };

        debug!(
            tagger = self.tagger.name(),
            technical = facts.skills.technical.len(),
            soft = facts.skills.soft.len(),
            years = facts.experience.years,
            periods = facts.experience.period_count,
            words = facts.text_quality.word_count,
            "extracted resume facts"
        );

        facts
    }
}
