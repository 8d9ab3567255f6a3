use crate::extraction::models::ResumeFacts;
use crate::requirements::models::JobRequirements;
use crate::scoring::models::MatchDetail;

pub const MAX_RECOMMENDATIONS: usize = 6;

/// Below this keyword-match score the missing top keywords are listed.
const KEYWORD_ADVICE_THRESHOLD: f64 = 70.0;
const TOP_KEYWORDS: usize = 5;

pub const GENERIC_NOTICE: &str =
    "Add a job description to get a score adapted to the position";

pub fn verdict(total: f64) -> &'static str {
    if total < 50.0 {
        "Needs significant improvement for this specific position"
    } else if total < 70.0 {
        "Good fit, but the adaptation to the position can improve"
    } else {
        "Excellent fit for this position"
    }
}

/// Specific advice first, closing verdict last. Specific messages are cut so
/// the verdict always fits under the cap.
pub fn build(
    total: f64,
    keyword_score: f64,
    facts: &ResumeFacts,
    requirements: &JobRequirements,
    detail: &MatchDetail,
) -> Vec<String> {
    let mut out = Vec::new();

    for (category, skills) in &detail.skills {
        if (1..=3).contains(&skills.missing.len()) {
            out.push(format!(
                "Add {}: {}",
                category.label(),
                skills.missing.join(", ")
            ));
        }
    }

    if let Some(required) = requirements.years_required {
        let actual = facts.experience.years;
        if actual < required {
            out.push(format!(
                "Insufficient experience: the position asks for {required} years, the résumé shows {actual}"
            ));
        }
    }

    if keyword_score < KEYWORD_ADVICE_THRESHOLD {
        let missing: Vec<&str> = requirements
            .keywords
            .iter()
            .take(TOP_KEYWORDS)
            .filter(|k| !detail.matched_keywords.contains(k))
            .map(String::as_str)
            .take(3)
            .collect();
        if !missing.is_empty() {
            out.push(format!("Include these keywords: {}", missing.join(", ")));
        }
    }

    out.truncate(MAX_RECOMMENDATIONS - 1);
    out.push(verdict(total).to_string());
    out
}
