// Job-independent résumé quality: structure, content, formatting, completeness.
// Each analysis scores 0–100; the overall score is their weighted sum.

pub mod completeness;
pub mod content;
pub mod formatting;
pub mod models;
pub mod recommendations;
pub mod structure;

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::extraction::{FactExtractor, ResumeFacts};
use crate::lexicon::CompiledLexicon;
use crate::nlp::LinguisticTagger;
use crate::text::round1;

pub use models::{ImprovementCategory, ImprovementDetails, ImprovementReport};

#[derive(Clone)]
pub struct ImprovementAnalyzer {
    lexicon: Arc<CompiledLexicon>,
    extractor: FactExtractor,
}

impl ImprovementAnalyzer {
    pub fn new(lexicon: Arc<CompiledLexicon>, tagger: Arc<dyn LinguisticTagger>) -> Self {
        Self {
            extractor: FactExtractor::new(lexicon.clone(), tagger),
            lexicon,
        }
    }

    pub fn improve(&self, resume_text: &str) -> ImprovementReport {
        let facts = self.extractor.extract(resume_text);
        self.improve_with_facts(resume_text, &facts)
    }

    /// Same as `improve`, reusing facts the caller already extracted.
    pub fn improve_with_facts(&self, resume_text: &str, facts: &ResumeFacts) -> ImprovementReport {
        let tables = &self.lexicon.tables;
        let details = ImprovementDetails {
            structure: structure::analyze_structure(resume_text, tables),
            content: content::analyze_content(resume_text, tables),
            formatting: formatting::analyze_formatting(resume_text),
            completeness: completeness::analyze_completeness(resume_text, facts, &self.lexicon),
        };

        let category_scores: BTreeMap<ImprovementCategory, f64> = BTreeMap::from([
            (ImprovementCategory::Structure, details.structure.score),
            (ImprovementCategory::Content, details.content.score),
            (ImprovementCategory::Formatting, details.formatting.score),
            (ImprovementCategory::Completeness, details.completeness.score),
        ]);

        let overall = round1(category_scores.iter().map(|(c, s)| s * c.weight()).sum());

        // stable sort: ties keep declaration order
        let mut priority_order = ImprovementCategory::ALL.to_vec();
        priority_order.sort_by(|a, b| category_scores[a].total_cmp(&category_scores[b]));

        let recommendations = recommendations::build(&details, tables);

        debug!(
            overall,
            structure = details.structure.score,
            content = details.content.score,
            formatting = details.formatting.score,
            completeness = details.completeness.score,
            recommendations = recommendations.len(),
            "computed improvement report"
        );

        ImprovementReport {
            overall,
            category_scores,
            recommendations,
            priority_order,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::improvement::models::Priority;
    use crate::lexicon::Lexicon;
    use crate::nlp::NullTagger;

    fn analyzer() -> ImprovementAnalyzer {
        let lexicon = Arc::new(CompiledLexicon::new(Lexicon::default()).unwrap());
        ImprovementAnalyzer::new(lexicon, Arc::new(NullTagger))
    }

    const RESUME: &str = "Ana Pérez\n\
        Email: ana.perez@correo.com | Teléfono: +56 9 1234 5678\n\
        linkedin.com/in/anaperez\n\
        \n\
        Experiencia Laboral\n\
        - Lideré la migración de la plataforma de pagos a AWS entre 2019 - 2023.\n\
        - Reduje en 30% los costos de infraestructura con Docker y Kubernetes.\n\
        - Desarrollé servicios en Python y Django para la gestión de pedidos.\n\
        \n\
        Educación\n\
        Ingeniería de sistemas, universidad nacional, 2012 - 2017\n\
        \n\
        Habilidades\n\
        - Python, Django, PostgreSQL, Docker, AWS\n\
        - Liderazgo y trabajo en equipo";

    #[test]
    fn test_overall_is_weighted_sum() {
        let report = analyzer().improve(RESUME);
        let expected: f64 = report
            .category_scores
            .iter()
            .map(|(c, s)| s * c.weight())
            .sum();
        assert_eq!(report.overall, round1(expected));
        assert_eq!(report.category_scores.len(), 4);
    }

    #[test]
    fn test_priority_order_is_ascending() {
        let report = analyzer().improve(RESUME);
        let scores: Vec<f64> = report
            .priority_order
            .iter()
            .map(|c| report.category_scores[c])
            .collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]), "{scores:?}");
        assert_eq!(report.priority_order.len(), 4);
    }

    #[test]
    fn test_priority_ties_keep_declaration_order() {
        // structure 10, formatting 85, content 5, completeness 0
        let report = analyzer().improve("");
        assert_eq!(
            report.priority_order,
            vec![
                ImprovementCategory::Completeness,
                ImprovementCategory::Content,
                ImprovementCategory::Structure,
                ImprovementCategory::Formatting,
            ]
        );
    }

    #[test]
    fn test_sections_and_completeness_detected() {
        let report = analyzer().improve(RESUME);
        assert!(report.details.structure.sections_missing.is_empty());
        assert!(report.details.completeness.has_email);
        assert!(report.details.completeness.has_linkedin);
        assert!(report.details.completeness.has_quantifiable_achievements);
        assert_eq!(report.details.formatting.bullet_points_count, 5);
    }

    #[test]
    fn test_weak_resume_gets_categorized_advice() {
        let report = analyzer().improve("Participé en proyectos. Ayudé al equipo.");
        let categories: Vec<ImprovementCategory> =
            report.recommendations.iter().map(|r| r.category).collect();

        assert!(categories.contains(&ImprovementCategory::Structure));
        assert!(categories.contains(&ImprovementCategory::Content));
        assert!(categories.contains(&ImprovementCategory::Completeness));
        let completeness_advice = report
            .recommendations
            .iter()
            .filter(|r| r.category == ImprovementCategory::Completeness)
            .count();
        assert_eq!(completeness_advice, 3);
        assert!(report
            .recommendations
            .iter()
            .filter(|r| r.category == ImprovementCategory::Completeness)
            .all(|r| r.priority == Priority::High));
    }

    #[test]
    fn test_improve_is_idempotent() {
        let a = analyzer();
        assert_eq!(a.improve(RESUME), a.improve(RESUME));
    }
}
