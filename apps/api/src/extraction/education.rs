use std::collections::BTreeMap;

use crate::extraction::models::{EducationProfile, EducationTier};
use crate::lexicon::Lexicon;
use crate::text::{contains_any, matching};

const MAX_INSTITUTIONS: usize = 5;

pub fn extract_education(
    text_lower: &str,
    lexicon: &Lexicon,
    organizations: &[String],
) -> EducationProfile {
    let level_counts: BTreeMap<EducationTier, u32> = lexicon
        .education_tiers
        .iter()
        .filter_map(|(tier, keywords)| {
            let hits = matching(text_lower, keywords).len() as u32;
            (hits > 0).then_some((*tier, hits))
        })
        .collect();

    let mut institutions: Vec<String> = Vec::new();
    for org in organizations {
        if institutions.len() == MAX_INSTITUTIONS {
            break;
        }
        let lower = org.to_lowercase();
        if contains_any(&lower, &lexicon.institution_markers) && !institutions.contains(org) {
            institutions.push(org.clone());
        }
    }

    EducationProfile {
        has_higher_education: level_counts.contains_key(&EducationTier::Undergraduate)
            || level_counts.contains_key(&EducationTier::Graduate),
        total_levels: level_counts.values().sum(),
        level_counts,
        institutions: institutions.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::models::EducationLevel;

    #[test]
    fn test_counts_keywords_per_tier() {
        let text = "ingeniería de sistemas en la universidad nacional. maestría en datos";
        let profile = extract_education(text, &Lexicon::default(), &[]);

        assert_eq!(profile.level_counts.get(&EducationTier::Undergraduate), Some(&2));
        assert_eq!(profile.level_counts.get(&EducationTier::Graduate), Some(&1));
        assert!(!profile.level_counts.contains_key(&EducationTier::Secondary));
        assert!(profile.has_higher_education);
        assert_eq!(profile.total_levels, 3);
        assert_eq!(profile.highest_level(), Some(EducationLevel::Graduate));
    }

    #[test]
    fn test_certification_only_has_no_rank() {
        let profile = extract_education("bootcamp de datos", &Lexicon::default(), &[]);
        assert!(!profile.has_higher_education);
        assert_eq!(profile.highest_level(), None);
    }

    #[test]
    fn test_institutions_need_marker_and_are_capped() {
        let orgs: Vec<String> = vec![
            "Acme S.A.".to_string(),
            "Universidad de Chile".to_string(),
            "Instituto Tecnológico".to_string(),
            "Universidad de Chile".to_string(),
            "Escuela Norte".to_string(),
            "Academia Sur".to_string(),
            "Colegio Central".to_string(),
            "Universidad Austral".to_string(),
        ];
        let profile = extract_education("", &Lexicon::default(), &orgs);
        assert_eq!(profile.institutions.len(), MAX_INSTITUTIONS);
        assert!(!profile.institutions.contains("Acme S.A."));
        assert!(!profile.institutions.contains("Universidad Austral"));
    }
}
