use std::collections::BTreeSet;

use crate::improvement::models::{Section, SectionHit, StructureAnalysis};
use crate::lexicon::Lexicon;
use crate::text::{contains_any, ratio, round1};

/// Lines this long or longer are prose, never headers.
const MAX_HEADER_CHARS: usize = 100;

/// Every line that names a section, tagged with the first section it matches.
pub fn detect_sections(text: &str, lexicon: &Lexicon) -> Vec<SectionHit> {
    text.split('\n')
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.chars().count() >= MAX_HEADER_CHARS {
                return None;
            }
            let lower = trimmed.to_lowercase();
            lexicon
                .section_keywords
                .iter()
                .find(|(_, keywords)| contains_any(&lower, keywords.as_slice()))
                .map(|(section, _)| SectionHit {
                    section: *section,
                    line: trimmed.to_string(),
                    line_number: i + 1,
                })
        })
        .collect()
}

fn length_band(words: usize) -> f64 {
    match words {
        300..=800 => 30.0,
        200..=299 | 801..=1200 => 20.0,
        _ => 10.0,
    }
}

pub fn analyze_structure(text: &str, lexicon: &Lexicon) -> StructureAnalysis {
    let sections_found = detect_sections(text, lexicon);
    let found: BTreeSet<Section> = sections_found.iter().map(|hit| hit.section).collect();
    let sections_missing: Vec<Section> = Section::ESSENTIAL
        .into_iter()
        .filter(|s| !found.contains(s))
        .collect();

    let word_count = text.split_whitespace().count();
    let line_count = text.split('\n').count();
    let paragraph_count = text.split("\n\n").filter(|p| !p.trim().is_empty()).count();

    let essential_found = Section::ESSENTIAL.len() - sections_missing.len();
    let score = (40.0 * essential_found as f64 / Section::ESSENTIAL.len() as f64
        + length_band(word_count)
        + (sections_found.len() as f64 * 5.0).min(30.0))
    .min(100.0);

    StructureAnalysis {
        sections_found,
        sections_missing,
        word_count,
        line_count,
        paragraph_count,
        avg_words_per_line: round1(ratio(word_count as f64, line_count)),
        score,
    }
}
