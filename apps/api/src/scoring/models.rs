use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::requirements::models::RequiredSkillCategory;

/// Weighted components of the adaptive score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubScore {
    Adaptation,
    RequiredSkills,
    SpecificExperience,
    KeywordMatch,
    Compatibility,
}

impl SubScore {
    #[cfg(test)]
    pub const ALL: [SubScore; 5] = [
        SubScore::Adaptation,
        SubScore::RequiredSkills,
        SubScore::SpecificExperience,
        SubScore::KeywordMatch,
        SubScore::Compatibility,
    ];

    /// Weights sum to 1.0.
    pub fn weight(self) -> f64 {
        match self {
            SubScore::Adaptation => 0.35,
            SubScore::RequiredSkills => 0.25,
            SubScore::SpecificExperience => 0.20,
            SubScore::KeywordMatch => 0.15,
            SubScore::Compatibility => 0.05,
        }
    }
}

/// Résumé-only estimate categories reported when there is no job to score against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileCategory {
    Skills,
    Experience,
    Education,
    Contact,
    Quality,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// No job description: fixed neutral score.
    #[default]
    Generic,
    Adaptive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitLevel {
    Low,
    #[default]
    Moderate,
    Strong,
}

impl FitLevel {
    pub fn from_total(total: f64) -> Self {
        if total >= 70.0 {
            FitLevel::Strong
        } else if total >= 50.0 {
            FitLevel::Moderate
        } else {
            FitLevel::Low
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub skills: BTreeMap<RequiredSkillCategory, CategoryMatch>,
    pub experience_met: bool,
    pub education_met: bool,
    pub matched_keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveScoreResult {
    pub mode: ScoringMode,
    /// 0–100, one decimal.
    pub total: f64,
    /// Empty in generic mode.
    pub breakdown: BTreeMap<SubScore, f64>,
    /// Per-category résumé estimate, each capped at 100. Generic mode only.
    pub profile_estimate: BTreeMap<ProfileCategory, f64>,
    pub fit_level: FitLevel,
    pub match_detail: MatchDetail,
    /// At most six; the closing verdict is always last in adaptive mode.
    pub recommendations: Vec<String>,
}
