//! Adaptive scorer — weighs résumé facts against mined job requirements.
//!
//! Five sub-scores, each 0–100, combined with the weights in `SubScore::weight`:
//!
//! | sub-score           | weight | measures                                  |
//! |---------------------|--------|-------------------------------------------|
//! | adaptation          | 0.35   | experience band + seniority + skill ratio |
//! | required_skills     | 0.25   | share of required skills present          |
//! | specific_experience | 0.20   | years vs requirement, companies, periods  |
//! | keyword_match       | 0.15   | job keywords present in the résumé        |
//! | compatibility       | 0.05   | education level and industry              |
//!
//! With no job description the result is the fixed generic score.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::extraction::models::ResumeFacts;
use crate::requirements::models::{JobRequirements, RequiredSkillCategory};
use crate::scoring::models::{
    AdaptiveScoreResult, CategoryMatch, FitLevel, MatchDetail, ProfileCategory, ScoringMode,
    SubScore,
};
use crate::scoring::recommendations;
use crate::text::{ratio, round1};

pub const GENERIC_TOTAL: f64 = 50.0;

/// Neutral score used when there is nothing to compare against.
const NEUTRAL: f64 = 50.0;

pub fn compute_adaptive_score(
    resume_text: &str,
    facts: &ResumeFacts,
    requirements: &JobRequirements,
) -> AdaptiveScoreResult {
    if !requirements.has_description {
        return generic_result(facts);
    }

    let lower = resume_text.to_lowercase();
    let skills = match_skills(facts, requirements);
    let required = requirements.required_skill_count();
    let matched: usize = skills.values().map(|m| m.matched.len()).sum();

    let matched_keywords: Vec<String> = requirements
        .keywords
        .iter()
        .filter(|k| lower.contains(k.as_str()))
        .cloned()
        .collect();

    let keyword_score = if requirements.keywords.is_empty() {
        NEUTRAL
    } else {
        ratio(matched_keywords.len() as f64, requirements.keywords.len()) * 100.0
    };

    let required_skills_score = if required == 0 {
        NEUTRAL
    } else {
        ratio(matched as f64, required) * 100.0
    };

    let breakdown = BTreeMap::from([
        (SubScore::Adaptation, adaptation(facts, requirements, matched, required)),
        (SubScore::RequiredSkills, required_skills_score),
        (SubScore::SpecificExperience, specific_experience(facts, requirements)),
        (SubScore::KeywordMatch, keyword_score),
        (SubScore::Compatibility, compatibility(facts, requirements)),
    ]);

    let weighted: f64 = breakdown.iter().map(|(k, v)| v * k.weight()).sum();
    let total = round1(weighted).clamp(0.0, 100.0);

    let match_detail = MatchDetail {
        skills,
        experience_met: requirements
            .years_required
            .map_or(true, |r| facts.experience.years >= r),
        education_met: education_met(facts, requirements),
        matched_keywords,
    };

    let recommendations =
        recommendations::build(total, keyword_score, facts, requirements, &match_detail);

    debug!(total, matched, required, "computed adaptive score");

    AdaptiveScoreResult {
        mode: ScoringMode::Adaptive,
        total,
        breakdown,
        profile_estimate: BTreeMap::new(),
        fit_level: FitLevel::from_total(total),
        match_detail,
        recommendations,
    }
}

fn generic_result(facts: &ResumeFacts) -> AdaptiveScoreResult {
    AdaptiveScoreResult {
        mode: ScoringMode::Generic,
        total: GENERIC_TOTAL,
        breakdown: BTreeMap::new(),
        profile_estimate: profile_estimate(facts),
        fit_level: FitLevel::from_total(GENERIC_TOTAL),
        // nothing was required, so nothing is unmet
        match_detail: MatchDetail {
            experience_met: true,
            education_met: true,
            ..MatchDetail::default()
        },
        recommendations: vec![recommendations::GENERIC_NOTICE.to_string()],
    }
}

/// Résumé-only category estimates: a fixed number of points per unit found.
fn profile_estimate(facts: &ResumeFacts) -> BTreeMap<ProfileCategory, f64> {
    let capped = |value: f64| round1(value.min(100.0));
    BTreeMap::from([
        (ProfileCategory::Skills, capped(facts.skills.technical.len() as f64 * 5.0)),
        (ProfileCategory::Experience, capped(facts.experience.years as f64 * 10.0)),
        (ProfileCategory::Education, capped(facts.education.total_levels as f64 * 15.0)),
        (ProfileCategory::Contact, capped(facts.contact.emails.len() as f64 * 20.0)),
        (ProfileCategory::Quality, capped(facts.text_quality.word_count as f64 * 0.2)),
    ])
}

/// Soft-skill requirements are checked against soft skills, all others
/// against technical skills.
fn candidate_skills(category: RequiredSkillCategory, facts: &ResumeFacts) -> &BTreeSet<String> {
    match category {
        RequiredSkillCategory::SoftSkills => &facts.skills.soft,
        _ => &facts.skills.technical,
    }
}

fn match_skills(
    facts: &ResumeFacts,
    requirements: &JobRequirements,
) -> BTreeMap<RequiredSkillCategory, CategoryMatch> {
    requirements
        .required_skills
        .iter()
        .map(|(category, wanted)| {
            let have = candidate_skills(*category, facts);
            let (matched, missing) = wanted.iter().cloned().partition(|s| have.contains(s));
            (*category, CategoryMatch { matched, missing })
        })
        .collect()
}

fn adaptation(
    facts: &ResumeFacts,
    requirements: &JobRequirements,
    matched: usize,
    required: usize,
) -> f64 {
    let actual = facts.experience.years;
    let mut score = match requirements.years_required {
        Some(r) if actual > 0 => {
            if actual >= r {
                30.0
            } else if f64::from(actual) >= 0.7 * f64::from(r) {
                20.0
            } else {
                10.0
            }
        }
        _ => 0.0,
    };

    score += requirements.seniority.credit();
    if required > 0 {
        score += ratio(matched as f64, required) * 40.0;
    }
    score.min(100.0)
}

fn specific_experience(facts: &ResumeFacts, requirements: &JobRequirements) -> f64 {
    let actual = f64::from(facts.experience.years);
    let years = match requirements.years_required {
        Some(r) if actual >= f64::from(r) => 60.0,
        Some(r) => actual / f64::from(r) * 60.0,
        None => (actual * 10.0).min(60.0),
    };
    let companies = (facts.experience.companies.len() as f64 * 5.0).min(20.0);
    let periods = (f64::from(facts.experience.period_count) * 4.0).min(20.0);
    (years + companies + periods).min(100.0)
}

fn education_met(facts: &ResumeFacts, requirements: &JobRequirements) -> bool {
    match requirements.education_level_required {
        None => true,
        Some(level) => facts
            .education
            .highest_level()
            .is_some_and(|highest| highest >= level),
    }
}

fn compatibility(facts: &ResumeFacts, requirements: &JobRequirements) -> f64 {
    let mut score = 0.0;
    if requirements.education_level_required.is_some() && education_met(facts, requirements) {
        score += 50.0;
    }
    if !requirements.industries.is_empty() {
        score += 50.0;
    }
    score
}
