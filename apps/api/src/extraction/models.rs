use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::requirements::models::EducationLevel;

/// Technical skill buckets used to group résumé skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Databases,
    Tools,
    Cloud,
    Methodologies,
}

/// Education tiers detected in a résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationTier {
    Secondary,
    Undergraduate,
    Graduate,
    Certification,
}

impl EducationTier {
    /// The requirement level this tier satisfies. Certifications carry no rank.
    pub fn level(self) -> Option<EducationLevel> {
        match self {
            EducationTier::Secondary => Some(EducationLevel::Secondary),
            EducationTier::Undergraduate => Some(EducationLevel::Undergraduate),
            EducationTier::Graduate => Some(EducationLevel::Graduate),
            EducationTier::Certification => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub technical: BTreeSet<String>,
    pub soft: BTreeSet<String>,
    /// Every value here is also in `technical`.
    pub by_category: BTreeMap<SkillCategory, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceProfile {
    /// 0 means no figure was stated.
    pub years: u32,
    pub companies: BTreeSet<String>,
    pub period_count: u32,
    pub has_experience: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationProfile {
    pub level_counts: BTreeMap<EducationTier, u32>,
    pub institutions: BTreeSet<String>,
    pub has_higher_education: bool,
    pub total_levels: u32,
}

impl EducationProfile {
    /// Highest ranked level found, if any tier with a rank was detected.
    pub fn highest_level(&self) -> Option<EducationLevel> {
        self.level_counts.keys().filter_map(|t| t.level()).max()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactProfile {
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
    pub urls: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextQuality {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_len: f64,
    pub avg_word_len: f64,
    pub action_word_count: usize,
    /// Percentage of words that are action verbs, one decimal.
    pub action_word_density: f64,
}

/// Everything the extractor learns from one résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeFacts {
    pub skills: SkillProfile,
    pub experience: ExperienceProfile,
    pub education: EducationProfile,
    pub contact: ContactProfile,
    pub text_quality: TextQuality,
}
