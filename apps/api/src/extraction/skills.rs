use std::collections::{BTreeMap, BTreeSet};

use crate::extraction::models::{SkillCategory, SkillProfile};
use crate::lexicon::Lexicon;
use crate::text::matching;

/// Substring-matches the skill lexicons against lowercased résumé text.
pub fn extract_skills(text_lower: &str, lexicon: &Lexicon) -> SkillProfile {
    let technical_hits = matching(text_lower, &lexicon.technical_skills);
    let soft_hits = matching(text_lower, &lexicon.soft_skills);

    let mut by_category: BTreeMap<SkillCategory, Vec<String>> = BTreeMap::new();
    for skill in &technical_hits {
        if let Some(category) = lexicon.category_of(skill) {
            by_category
                .entry(category)
                .or_default()
                .push(skill.to_string());
        }
    }

    SkillProfile {
        technical: technical_hits.iter().map(|s| s.to_string()).collect(),
        soft: soft_hits.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        by_category,
    }
}
