use crate::extraction::models::ResumeFacts;
use crate::improvement::models::CompletenessAnalysis;
use crate::lexicon::CompiledLexicon;

pub fn has_quantifiable_achievements(text: &str, lexicon: &CompiledLexicon) -> bool {
    lexicon.patterns.achievements.iter().any(|re| re.is_match(text))
}

/// Scores contact, education, experience and skills coverage from already
/// extracted facts. Each block contributes at most 30 points.
pub fn analyze_completeness(
    text: &str,
    facts: &ResumeFacts,
    lexicon: &CompiledLexicon,
) -> CompletenessAnalysis {
    let mut analysis = CompletenessAnalysis {
        has_email: !facts.contact.emails.is_empty(),
        has_phone: !facts.contact.phones.is_empty(),
        has_linkedin: lexicon.patterns.linkedin.is_match(text),
        has_higher_education: facts.education.has_higher_education,
        period_count: facts.experience.period_count,
        years_experience: facts.experience.years,
        companies_mentioned: facts.experience.companies.len(),
        has_quantifiable_achievements: has_quantifiable_achievements(text, lexicon),
        has_technical_skills: !facts.skills.technical.is_empty(),
        has_soft_skills: !facts.skills.soft.is_empty(),
        ..CompletenessAnalysis::default()
    };

    let checks = [
        (analysis.has_email, 10.0, "Contact email"),
        (analysis.has_phone, 10.0, "Phone number"),
        (analysis.has_linkedin, 10.0, "LinkedIn profile"),
        (analysis.has_higher_education, 20.0, "Clear academic background"),
        (analysis.years_experience > 0, 10.0, "Stated years of experience"),
        (analysis.companies_mentioned > 0, 10.0, "Previous employers"),
        (analysis.has_quantifiable_achievements, 10.0, "Quantifiable achievements"),
        (analysis.has_technical_skills, 10.0, "Specific technical skills"),
        (analysis.has_soft_skills, 10.0, "Soft skills"),
    ];

    let mut score = 0.0;
    for (present, points, label) in checks {
        if present {
            score += points;
        } else {
            analysis.missing_elements.push(label.to_string());
        }
    }
    // partial education credit
    if !analysis.has_higher_education && analysis.period_count > 0 {
        score += 10.0;
    }

    analysis.score = f64::min(score, 100.0);
    analysis
}
