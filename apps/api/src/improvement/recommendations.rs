use crate::improvement::models::{ImprovementCategory, ImprovementDetails, Priority, Recommendation};
use crate::lexicon::Lexicon;

/// Analyses scoring at or above this get no advice.
const ADVICE_THRESHOLD: f64 = 70.0;

fn rec(
    category: ImprovementCategory,
    priority: Priority,
    message: impl Into<String>,
    suggestion: impl Into<String>,
) -> Recommendation {
    Recommendation {
        category,
        priority,
        message: message.into(),
        suggestion: suggestion.into(),
    }
}

fn first(list: &[String], n: usize) -> String {
    list.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}

pub fn build(details: &ImprovementDetails, lexicon: &Lexicon) -> Vec<Recommendation> {
    use ImprovementCategory::*;

    let mut out = Vec::new();

    let structure = &details.structure;
    if structure.score < ADVICE_THRESHOLD {
        if !structure.sections_missing.is_empty() {
            let names: Vec<&str> = structure.sections_missing.iter().map(|s| s.label()).collect();
            out.push(rec(
                Structure,
                Priority::High,
                format!("Add the missing sections: {}", names.join(", ")),
                "Organize the résumé in clearly titled sections",
            ));
        }
        if structure.word_count < 300 {
            out.push(rec(
                Structure,
                Priority::Medium,
                "The résumé is very short, consider adding more detail",
                "Expand the descriptions of your experience and skills",
            ));
        } else if structure.word_count > 800 {
            out.push(rec(
                Structure,
                Priority::Medium,
                "The résumé is very long, consider summarizing",
                "Keep it to one or two pages and remove redundant information",
            ));
        }
    }

    let content = &details.content;
    if content.score < ADVICE_THRESHOLD {
        if content.action_verbs_count < 5 {
            out.push(rec(
                Content,
                Priority::High,
                "Use more action verbs to describe your achievements",
                format!("Examples: {}", first(&lexicon.action_verbs, 5)),
            ));
        }
        if content.weak_words_count > 3 {
            out.push(rec(
                Content,
                Priority::Medium,
                "Reduce the use of weak words",
                format!("Avoid: {}", first(&lexicon.weak_words, 3)),
            ));
        }
    }

    let formatting = &details.formatting;
    if formatting.score < ADVICE_THRESHOLD {
        if formatting.long_lines_count > 5 {
            out.push(rec(
                Formatting,
                Priority::Medium,
                "Too many very long lines hurt readability",
                "Split long lines into shorter ones of 60 to 80 characters",
            ));
        }
        if formatting.bullet_points_count < 3 {
            out.push(rec(
                Formatting,
                Priority::Low,
                "Consider using more bulleted lists",
                "Lists make the résumé easier to scan",
            ));
        }
    }

    let completeness = &details.completeness;
    if completeness.score < ADVICE_THRESHOLD {
        for missing in completeness.missing_elements.iter().take(3) {
            out.push(rec(
                Completeness,
                Priority::High,
                format!("Missing: {missing}"),
                "Recruiters expect this information",
            ));
        }
    }

    out
}
