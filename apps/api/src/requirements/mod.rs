// Job requirement mining: job description text → keywords, required skills,
// explicit requirements, seniority and industries.

pub mod keywords;
pub mod models;

use std::collections::BTreeMap;
use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use crate::lexicon::CompiledLexicon;
use crate::nlp::{try_tag, LinguisticTagger};
use crate::text::{contains_any, matching};

pub use models::{JobRequirements, KeywordSource, RequiredSkillCategory, Seniority};

/// Integer from the first pattern that matches. Later patterns are never
/// consulted once one matches, even if its captures do not parse.
pub fn first_pattern_years(text_lower: &str, patterns: &[Regex]) -> Option<u32> {
    let caps = patterns.iter().find_map(|re| re.captures(text_lower))?;
    caps.iter()
        .skip(1)
        .flatten()
        .find_map(|m| m.as_str().parse::<u32>().ok())
        .filter(|years| *years > 0)
}

#[derive(Clone)]
pub struct RequirementMiner {
    lexicon: Arc<CompiledLexicon>,
    tagger: Arc<dyn LinguisticTagger>,
}

impl RequirementMiner {
    pub fn new(lexicon: Arc<CompiledLexicon>, tagger: Arc<dyn LinguisticTagger>) -> Self {
        Self { lexicon, tagger }
    }

    pub fn mine(&self, job_text: &str) -> JobRequirements {
        if job_text.trim().is_empty() {
            return JobRequirements::default();
        }

        let lower = job_text.to_lowercase();
        let tables = &self.lexicon.tables;
        let (keywords, keyword_source) = self.keywords(&lower, job_text);

        let required_skills: BTreeMap<RequiredSkillCategory, Vec<String>> = tables
            .required_skills
            .iter()
            .filter_map(|(category, skills)| {
                let hits: Vec<String> = matching(&lower, skills)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                (!hits.is_empty()).then_some((*category, hits))
            })
            .collect();

        // BTreeMap iterates in level order, which is also the priority order
        let education_level_required = tables
            .required_education
            .iter()
            .find(|(_, keywords)| contains_any(&lower, keywords.as_slice()))
            .map(|(level, _)| *level);

        let requirements = JobRequirements {
            keywords,
            keyword_source,
            years_required: first_pattern_years(&lower, &self.lexicon.patterns.required_years),
            education_level_required,
            required_skills,
            languages_required: owned(matching(&lower, &tables.languages)),
            contract_types: owned(matching(&lower, &tables.contract_types)),
            seniority: self.seniority(&lower),
            industries: tables
                .industries
                .iter()
                .filter(|i| contains_any(&lower, &i.keywords))
                .map(|i| i.industry.clone())
                .collect(),
            has_description: true,
        };

        debug!(
            keywords = requirements.keywords.len(),
            source = ?requirements.keyword_source,
            required_skills = requirements.required_skill_count(),
            years = ?requirements.years_required,
            seniority = ?requirements.seniority,
            "mined job requirements"
        );

        requirements
    }

    fn keywords(&self, lower: &str, job_text: &str) -> (Vec<String>, KeywordSource) {
        match try_tag(self.tagger.as_ref(), lower) {
            Some(tokens) => (
                keywords::tagged_keywords(&tokens, &self.lexicon),
                KeywordSource::Tagged,
            ),
            None => (
                keywords::fallback_keywords(job_text, &self.lexicon),
                KeywordSource::Fallback,
            ),
        }
    }

    fn seniority(&self, lower: &str) -> Seniority {
        let markers = &self.lexicon.tables.seniority;
        if contains_any(lower, &markers.senior) {
            Seniority::Senior
        } else if contains_any(lower, &markers.mid) {
            Seniority::Mid
        } else if contains_any(lower, &markers.junior) {
            Seniority::Junior
        } else {
            Seniority::Unspecified
        }
    }
}

fn owned(hits: Vec<&str>) -> Vec<String> {
    hits.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::requirements::models::EducationLevel;
    use crate::nlp::testing::{BrokenTagger, ScriptedTagger};
    use crate::nlp::NullTagger;

    fn miner(tagger: Arc<dyn LinguisticTagger>) -> RequirementMiner {
        let lexicon = Arc::new(CompiledLexicon::new(Lexicon::default()).unwrap());
        RequirementMiner::new(lexicon, tagger)
    }

    const JOB: &str = "Buscamos desarrollador Senior con 5 años de experiencia en Python, \
                       Django y PostgreSQL. Se valora Docker y AWS. Inglés avanzado. \
                       Modalidad remoto, tiempo completo. Empresa de software fintech. \
                       Ingeniería en sistemas. Trabajo en equipo y liderazgo.";

    #[test]
    fn test_mines_full_description() {
        let reqs = miner(Arc::new(NullTagger)).mine(JOB);

        assert!(reqs.has_description);
        assert_eq!(reqs.years_required, Some(5));
        assert_eq!(reqs.seniority, Seniority::Senior);
        // substring matching: "go" is also found inside "liderazgo"
        assert_eq!(
            reqs.required_skills.get(&RequiredSkillCategory::ProgrammingLanguages),
            Some(&vec!["python".to_string(), "go".to_string()])
        );
        assert_eq!(
            reqs.required_skills.get(&RequiredSkillCategory::DevopsTools),
            Some(&vec!["docker".to_string(), "aws".to_string()])
        );
        assert_eq!(
            reqs.required_skills.get(&RequiredSkillCategory::SoftSkills),
            Some(&vec!["trabajo en equipo".to_string(), "liderazgo".to_string()])
        );
        assert_eq!(reqs.education_level_required, Some(EducationLevel::Undergraduate));
        assert_eq!(reqs.languages_required, vec!["inglés"]);
        assert_eq!(reqs.contract_types, vec!["tiempo completo", "remoto"]);
        assert!(reqs.industries.contains(&"tecnologia".to_string()));
        assert!(reqs.industries.contains(&"finanzas".to_string()));
        assert_eq!(reqs.keyword_source, KeywordSource::Fallback);
    }

    #[test]
    fn test_empty_description() {
        for text in ["", "   \n\t "] {
            let reqs = miner(Arc::new(NullTagger)).mine(text);
            assert_eq!(reqs, JobRequirements::default());
            assert!(!reqs.has_description);
            assert_eq!(reqs.keyword_source, KeywordSource::None);
        }
    }

    #[test]
    fn test_senior_wins_over_junior() {
        let reqs = miner(Arc::new(NullTagger)).mine("Puesto junior o senior según perfil");
        assert_eq!(reqs.seniority, Seniority::Senior);
    }

    #[test]
    fn test_no_markers_is_unspecified() {
        let reqs = miner(Arc::new(NullTagger)).mine("Vendedor de mostrador");
        assert_eq!(reqs.seniority, Seniority::Unspecified);
        assert!(reqs.required_skills.is_empty());
    }

    #[test]
    fn test_first_matching_year_pattern_wins() {
        let lexicon = CompiledLexicon::new(Lexicon::default()).unwrap();
        // the "mínimo de" pattern appears first in the text, but the
        // "N años de experiencia" pattern is listed first
        let text = "mínimo de 2 años en el área y 4 años de experiencia total";
        assert_eq!(
            first_pattern_years(text, &lexicon.patterns.required_years),
            Some(4)
        );
    }

    #[test]
    fn test_zero_years_means_no_requirement() {
        let reqs = miner(Arc::new(NullTagger)).mine("0 años de experiencia");
        assert_eq!(reqs.years_required, None);
    }

    #[test]
    fn test_technical_beats_undergraduate() {
        let reqs = miner(Arc::new(NullTagger)).mine("Título técnico o ingeniería");
        assert_eq!(reqs.education_level_required, Some(EducationLevel::Technical));
    }

    #[test]
    fn test_fallback_keywords_are_capped() {
        let reqs = miner(Arc::new(NullTagger)).mine(JOB);
        assert!(!reqs.keywords.is_empty());
        assert!(reqs.keywords.len() <= keywords::FALLBACK_LIMIT);
    }

    #[test]
    fn test_tagged_path_used_when_tagger_works() {
        let tagger = ScriptedTagger {
            nouns: vec!["desarrollador", "python", "experiencia"],
            adjectives: vec![],
            stop_words: vec![],
            organizations: vec![],
        };
        let reqs = miner(Arc::new(tagger)).mine("Desarrollador Python con experiencia");

        assert_eq!(reqs.keyword_source, KeywordSource::Tagged);
        assert!(reqs.keywords.contains(&"desarrollador".to_string()));
        assert!(reqs.keywords.contains(&"desarrollador python".to_string()));
        assert!(!reqs.keywords.contains(&"experiencia".to_string()));
        assert!(reqs.keywords.len() <= keywords::TAGGED_LIMIT);
    }

    #[test]
    fn test_failing_tagger_falls_back() {
        let reqs = miner(Arc::new(BrokenTagger)).mine(JOB);
        assert_eq!(reqs.keyword_source, KeywordSource::Fallback);
        assert!(!reqs.keywords.is_empty());
    }

    #[test]
    fn test_mine_is_idempotent() {
        let m = miner(Arc::new(NullTagger));
        assert_eq!(m.mine(JOB), m.mine(JOB));
    }
}
