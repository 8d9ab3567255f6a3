use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical résumé sections, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    PersonalInfo,
    WorkExperience,
    Education,
    Skills,
    Summary,
    Achievements,
    Certifications,
}

impl Section {
    pub const ESSENTIAL: [Section; 4] = [
        Section::PersonalInfo,
        Section::WorkExperience,
        Section::Education,
        Section::Skills,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::PersonalInfo => "personal information",
            Section::WorkExperience => "work experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Summary => "professional summary",
            Section::Achievements => "achievements",
            Section::Certifications => "certifications",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementCategory {
    Structure,
    Content,
    Formatting,
    Completeness,
}

impl ImprovementCategory {
    pub const ALL: [ImprovementCategory; 4] = [
        ImprovementCategory::Structure,
        ImprovementCategory::Content,
        ImprovementCategory::Formatting,
        ImprovementCategory::Completeness,
    ];

    /// Share of the overall improvement score.
    pub fn weight(self) -> f64 {
        match self {
            ImprovementCategory::Structure => 0.25,
            ImprovementCategory::Content => 0.30,
            ImprovementCategory::Formatting => 0.20,
            ImprovementCategory::Completeness => 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: ImprovementCategory,
    pub priority: Priority,
    pub message: String,
    pub suggestion: String,
}

/// A line recognised as a section header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionHit {
    pub section: Section,
    pub line: String,
    /// 1-based.
    pub line_number: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureAnalysis {
    pub sections_found: Vec<SectionHit>,
    pub sections_missing: Vec<Section>,
    pub word_count: usize,
    pub line_count: usize,
    pub paragraph_count: usize,
    pub avg_words_per_line: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub action_verbs_count: usize,
    pub weak_words_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub keyword_density: usize,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattingAnalysis {
    pub avg_line_length: f64,
    pub long_lines_count: usize,
    pub uppercase_lines_count: usize,
    pub bullet_points_count: usize,
    pub empty_lines_ratio: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletenessAnalysis {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_linkedin: bool,
    pub has_higher_education: bool,
    pub period_count: u32,
    pub years_experience: u32,
    pub companies_mentioned: usize,
    pub has_quantifiable_achievements: bool,
    pub has_technical_skills: bool,
    pub has_soft_skills: bool,
    pub missing_elements: Vec<String>,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImprovementDetails {
    pub structure: StructureAnalysis,
    pub content: ContentAnalysis,
    pub formatting: FormattingAnalysis,
    pub completeness: CompletenessAnalysis,
}

/// Job-independent quality report for a résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementReport {
    pub overall: f64,
    pub category_scores: BTreeMap<ImprovementCategory, f64>,
    pub recommendations: Vec<Recommendation>,
    /// Lowest score first.
    pub priority_order: Vec<ImprovementCategory>,
    pub details: ImprovementDetails,
}
