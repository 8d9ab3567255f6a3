use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Skill groups mined from a job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredSkillCategory {
    ProgrammingLanguages,
    Frameworks,
    Databases,
    DevopsTools,
    DataAnalysis,
    Methodologies,
    SoftSkills,
}

impl RequiredSkillCategory {
    /// Human label used in recommendation messages.
    pub fn label(self) -> &'static str {
        match self {
            RequiredSkillCategory::ProgrammingLanguages => "programming languages",
            RequiredSkillCategory::Frameworks => "frameworks",
            RequiredSkillCategory::Databases => "databases",
            RequiredSkillCategory::DevopsTools => "devops tools",
            RequiredSkillCategory::DataAnalysis => "data analysis",
            RequiredSkillCategory::Methodologies => "methodologies",
            RequiredSkillCategory::SoftSkills => "soft skills",
        }
    }
}

/// Required education level. Declaration order is the ordinal used for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Secondary,
    Technical,
    Undergraduate,
    Graduate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    #[default]
    Unspecified,
}

impl Seniority {
    /// Points awarded by the adaptation sub-score.
    pub fn credit(self) -> f64 {
        match self {
            Seniority::Junior => 10.0,
            Seniority::Mid => 20.0,
            Seniority::Senior => 30.0,
            Seniority::Unspecified => 0.0,
        }
    }
}

/// Which keyword path produced `JobRequirements::keywords`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordSource {
    Tagged,
    Fallback,
    #[default]
    None,
}

/// Structured requirements mined from a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    /// Ranked by frequency. At most 25 (tagged) or 15 (fallback).
    pub keywords: Vec<String>,
    pub keyword_source: KeywordSource,
    pub required_skills: BTreeMap<RequiredSkillCategory, Vec<String>>,
    pub years_required: Option<u32>,
    pub education_level_required: Option<EducationLevel>,
    pub languages_required: Vec<String>,
    pub contract_types: Vec<String>,
    pub seniority: Seniority,
    pub industries: Vec<String>,
    /// Callers must branch on this before reading the other fields.
    pub has_description: bool,
}

impl JobRequirements {
    pub fn required_skill_count(&self) -> usize {
        self.required_skills.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_level_ordinal() {
        assert!(EducationLevel::Secondary < EducationLevel::Technical);
        assert!(EducationLevel::Technical < EducationLevel::Undergraduate);
        assert!(EducationLevel::Undergraduate < EducationLevel::Graduate);
    }

    #[test]
    fn test_seniority_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Seniority::Mid).unwrap(), r#""mid""#);
        assert_eq!(
            serde_json::to_string(&Seniority::default()).unwrap(),
            r#""unspecified""#
        );
    }

    #[test]
    fn test_category_map_keys_serialize_as_strings() {
        let mut reqs = JobRequirements::default();
        reqs.required_skills.insert(
            RequiredSkillCategory::DevopsTools,
            vec!["docker".to_string()],
        );
        let json = serde_json::to_value(&reqs).unwrap();
        assert_eq!(json["required_skills"]["devops_tools"][0], "docker");
        assert_eq!(reqs.required_skill_count(), 1);
    }
}
