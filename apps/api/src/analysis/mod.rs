// Analysis engine: one call runs every analyzer over a résumé and an optional
// job description. Held in `AppState` as `Arc<AnalysisEngine>`.

pub mod handlers;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::extraction::{FactExtractor, ResumeFacts};
use crate::improvement::{ImprovementAnalyzer, ImprovementReport};
use crate::lexicon::CompiledLexicon;
use crate::nlp::LinguisticTagger;
use crate::requirements::{JobRequirements, RequirementMiner};
use crate::scoring::{compute_adaptive_score, AdaptiveScoreResult};
use crate::text::{ratio, round1};

/// Raw size measurements of the submitted text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub characters: usize,
    pub words: usize,
    pub lines: usize,
    /// Blocks separated by blank lines.
    pub paragraphs: usize,
    pub words_per_line: f64,
}

impl DocumentStats {
    pub fn from_text(text: &str) -> Self {
        let words = text.split_whitespace().count();
        let lines = text.split('\n').count();
        let paragraphs = text
            .split("\n\n")
            .filter(|p| !p.trim().is_empty())
            .count();

        Self {
            characters: text.chars().count(),
            words,
            lines,
            paragraphs,
            words_per_line: round1(ratio(words as f64, lines)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub document: DocumentStats,
    pub facts: ResumeFacts,
    pub requirements: JobRequirements,
    pub score: AdaptiveScoreResult,
    pub improvement: ImprovementReport,
}

pub struct AnalysisEngine {
    extractor: FactExtractor,
    miner: RequirementMiner,
    improver: ImprovementAnalyzer,
}

impl AnalysisEngine {
    pub fn new(lexicon: Arc<CompiledLexicon>, tagger: Arc<dyn LinguisticTagger>) -> Self {
        Self {
            extractor: FactExtractor::new(lexicon.clone(), tagger.clone()),
            miner: RequirementMiner::new(lexicon.clone(), tagger.clone()),
            improver: ImprovementAnalyzer::new(lexicon, tagger),
        }
    }

    pub fn extract(&self, resume_text: &str) -> ResumeFacts {
        self.extractor.extract(resume_text)
    }

    pub fn mine(&self, job_text: &str) -> JobRequirements {
        self.miner.mine(job_text)
    }

    pub fn improve(&self, resume_text: &str) -> ImprovementReport {
        self.improver.improve(resume_text)
    }

    /// Full report. An empty `job_text` yields the generic score.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> AnalysisReport {
        let facts = self.extractor.extract(resume_text);
        let requirements = self.miner.mine(job_text);
        let score = compute_adaptive_score(resume_text, &facts, &requirements);
        let improvement = self.improver.improve_with_facts(resume_text, &facts);

        info!(
            mode = ?score.mode,
            total = score.total,
            fit = ?score.fit_level,
            improvement = improvement.overall,
            "analysis complete"
        );

        AnalysisReport {
            document: DocumentStats::from_text(resume_text),
            facts,
            requirements,
            score,
            improvement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::nlp::NullTagger;
    use crate::scoring::models::{ScoringMode, SubScore};

    fn engine() -> AnalysisEngine {
        let lexicon = Arc::new(CompiledLexicon::new(Lexicon::default()).unwrap());
        AnalysisEngine::new(lexicon, Arc::new(NullTagger))
    }

    const RESUME: &str = "Carlos Soto\n\
        Email: carlos.soto@correo.com\n\
        \n\
        Experiencia Laboral\n\
        5 años de experiencia en Python, Django y PostgreSQL.\n\
        - Desarrollé APIs REST para la plataforma de ventas, 2018 - 2023.\n\
        - Optimicé consultas y reduje en 40% los tiempos de respuesta.\n\
        \n\
        Habilidades\n\
        Python, Django, Docker, AWS, liderazgo, trabajo en equipo";

    const JOB: &str = "Buscamos desarrollador backend senior con 4 años de experiencia \
                       en Python y Django, con conocimientos de Docker y Kubernetes.";

    #[test]
    fn test_document_stats() {
        let stats = DocumentStats::from_text("uno dos\ntres\n\ncuatro");
        assert_eq!(stats.words, 4);
        assert_eq!(stats.lines, 4);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.words_per_line, 1.0);
        assert_eq!(stats.characters, 20);
    }

    #[test]
    fn test_document_stats_empty() {
        let stats = DocumentStats::from_text("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.paragraphs, 0);
        assert_eq!(stats.words_per_line, 0.0);
    }

    #[test]
    fn test_trailing_newline_counts_as_a_line() {
        let text = "Experiencia\nPython y AWS\n";
        assert_eq!(DocumentStats::from_text(text).lines, 3);

        let report = engine().analyze(text, "");
        assert_eq!(
            report.document.lines,
            report.improvement.details.structure.line_count
        );
    }

    #[test]
    fn test_analyze_without_job_is_generic() {
        let report = engine().analyze(RESUME, "");
        assert_eq!(report.score.mode, ScoringMode::Generic);
        assert_eq!(report.score.total, 50.0);
        assert!(!report.requirements.has_description);
        assert!(report.improvement.overall > 0.0);
    }

    #[test]
    fn test_analyze_with_job_is_adaptive() {
        let report = engine().analyze(RESUME, JOB);

        assert_eq!(report.score.mode, ScoringMode::Adaptive);
        assert_eq!(report.score.breakdown.len(), SubScore::ALL.len());
        assert_eq!(report.facts.experience.years, 5);
        assert_eq!(report.requirements.years_required, Some(4));
        assert!(report.score.match_detail.experience_met);
        let devops = &report.score.match_detail.skills
            [&crate::requirements::RequiredSkillCategory::DevopsTools];
        assert!(devops.matched.contains(&"docker".to_string()));
        assert_eq!(devops.missing, vec!["kubernetes".to_string()]);
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let e = engine();
        assert_eq!(e.analyze(RESUME, JOB), e.analyze(RESUME, JOB));
    }

    #[test]
    fn test_report_serializes_with_snake_case_keys() {
        let report = engine().analyze(RESUME, JOB);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["score"]["breakdown"]["specific_experience"].is_number());
        assert!(json["improvement"]["category_scores"]["completeness"].is_number());
        assert_eq!(json["requirements"]["seniority"], "senior");
    }
}
