use regex::Regex;

use crate::extraction::models::ExperienceProfile;
use crate::lexicon::CompiledLexicon;

const MAX_COMPANIES: usize = 8;

/// Largest integer captured by any match of any pattern, or 0.
///
/// Every pattern is applied and all captures are pooled before taking the
/// maximum. Real résumés match several of these patterns inconsistently, so
/// the order of `patterns` must not change the result.
pub fn extract_years(text_lower: &str, patterns: &[Regex]) -> u32 {
    patterns
        .iter()
        .flat_map(|re| re.captures_iter(text_lower))
        .flat_map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .filter_map(|m| m.as_str().parse::<u32>().ok())
                .collect::<Vec<_>>()
        })
        .max()
        .unwrap_or(0)
}

/// Number of date-range matches ("2018 - 2021", "desde 2015 hasta 2019", ...).
pub fn count_periods(text: &str, patterns: &[Regex]) -> u32 {
    let count: usize = patterns.iter().map(|re| re.find_iter(text).count()).sum();
    u32::try_from(count).unwrap_or(u32::MAX)
}

pub fn extract_experience(
    text: &str,
    text_lower: &str,
    lexicon: &CompiledLexicon,
    organizations: &[String],
) -> ExperienceProfile {
    let years = extract_years(text_lower, &lexicon.patterns.experience_years);
    let period_count = count_periods(text, &lexicon.patterns.periods);

    let mut companies = Vec::new();
    for org in organizations {
        let name = org.trim();
        if name.chars().count() > 2 && !companies.iter().any(|c: &String| c == name) {
            companies.push(name.to_string());
        }
        if companies.len() == MAX_COMPANIES {
            break;
        }
    }

    ExperienceProfile {
        has_experience: years > 0 || !companies.is_empty() || period_count > 0,
        years,
        companies: companies.into_iter().collect(),
        period_count,
    }
}
