use regex::{Regex, RegexBuilder};

use super::{Lexicon, LexiconError};

/// Compiled regex sets from a `Lexicon`.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub experience_years: Vec<Regex>,
    pub required_years: Vec<Regex>,
    pub periods: Vec<Regex>,
    pub achievements: Vec<Regex>,
    pub keyword_token: Regex,
    pub linkedin: Regex,
}

impl Patterns {
    pub fn compile(lexicon: &Lexicon) -> Result<Self, LexiconError> {
        Ok(Self {
            experience_years: compile_all(
                "experience_year_patterns",
                &lexicon.experience_year_patterns,
            )?,
            required_years: compile_all("required_year_patterns", &lexicon.required_year_patterns)?,
            periods: compile_all("period_patterns", &lexicon.period_patterns)?,
            achievements: compile_all("achievement_patterns", &lexicon.achievement_patterns)?,
            keyword_token: compile("keyword_token_pattern", &lexicon.keyword_token_pattern)?,
            linkedin: compile("linkedin_pattern", &lexicon.linkedin_pattern)?,
        })
    }
}

fn compile(table: &'static str, source: &str) -> Result<Regex, LexiconError> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|source| LexiconError::InvalidPattern { table, source })
}

fn compile_all(table: &'static str, sources: &[String]) -> Result<Vec<Regex>, LexiconError> {
    sources.iter().map(|s| compile(table, s)).collect()
}
