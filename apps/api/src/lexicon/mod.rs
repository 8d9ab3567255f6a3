//! Lexicon tables — the keyword lists, category maps and regex sources every
//! analyzer matches against.
//!
//! The built-in tables (see `defaults`) target Spanish-language résumés. A JSON
//! file can override any subset of them; fields it leaves out keep their
//! default value. Swapping the tables swaps the supported language or domain
//! without touching code.

mod defaults;
mod patterns;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extraction::models::{EducationTier, SkillCategory};
use crate::improvement::models::Section;
use crate::requirements::models::{EducationLevel, RequiredSkillCategory};

pub use patterns::Patterns;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid pattern in '{table}': {source}")]
    InvalidPattern {
        table: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Seniority markers, checked senior → mid → junior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeniorityMarkers {
    pub senior: Vec<String>,
    pub mid: Vec<String>,
    pub junior: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryKeywords {
    pub industry: String,
    pub keywords: Vec<String>,
}

/// Raw lexicon tables. All keyword entries are expected in lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Lexicon {
    // Résumé skills
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub skill_categories: BTreeMap<SkillCategory, Vec<String>>,

    // Prose quality
    pub action_verbs: Vec<String>,
    pub weak_words: Vec<String>,
    pub professional_keywords: Vec<String>,

    // Structure and education
    pub section_keywords: BTreeMap<Section, Vec<String>>,
    pub education_tiers: BTreeMap<EducationTier, Vec<String>>,
    pub institution_markers: Vec<String>,

    // Job description mining
    pub required_skills: BTreeMap<RequiredSkillCategory, Vec<String>>,
    pub required_education: BTreeMap<EducationLevel, Vec<String>>,
    pub languages: Vec<String>,
    pub contract_types: Vec<String>,
    pub seniority: SeniorityMarkers,
    pub industries: Vec<IndustryKeywords>,
    pub keyword_stop_words: Vec<String>,
    pub generic_keyword_terms: Vec<String>,

    // Regex sources, compiled case-insensitively
    pub keyword_token_pattern: String,
    pub experience_year_patterns: Vec<String>,
    pub required_year_patterns: Vec<String>,
    pub period_patterns: Vec<String>,
    pub achievement_patterns: Vec<String>,
    pub linkedin_pattern: String,
}

impl Lexicon {
    /// Loads tables from a JSON file. Missing fields fall back to the defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The category a technical skill is listed under, if any.
    pub fn category_of(&self, skill: &str) -> Option<SkillCategory> {
        self.skill_categories
            .iter()
            .find(|(_, skills)| skills.iter().any(|s| s == skill))
            .map(|(category, _)| *category)
    }
}

/// Lexicon tables plus their compiled regexes. Immutable once built and
/// shared read-only between analyzers.
#[derive(Debug, Clone)]
pub struct CompiledLexicon {
    pub tables: Lexicon,
    pub patterns: Patterns,
}

impl CompiledLexicon {
    pub fn new(tables: Lexicon) -> Result<Self, LexiconError> {
        let patterns = Patterns::compile(&tables)?;
        Ok(Self { tables, patterns })
    }
}
