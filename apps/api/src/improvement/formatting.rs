use crate::improvement::models::FormattingAnalysis;
use crate::text::{ratio, round1};

const LONG_LINE_CHARS: usize = 100;
const BULLET_MARKERS: [char; 4] = ['-', '•', '*', '·'];

fn is_shouting(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.chars().count() > 10
        && trimmed.chars().any(char::is_alphabetic)
        && trimmed.to_uppercase() == trimmed
}

/// Penalty for average non-empty line length. The bands are exclusive.
fn line_length_penalty(avg: f64) -> f64 {
    if avg > 100.0 {
        40.0
    } else if avg > 80.0 {
        20.0
    } else {
        0.0
    }
}

pub fn analyze_formatting(text: &str) -> FormattingAnalysis {
    let lines: Vec<&str> = text.split('\n').map(|l| l.trim_end_matches('\r')).collect();
    let lengths: Vec<usize> = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().count())
        .collect();

    let avg_line_length = ratio(lengths.iter().sum::<usize>() as f64, lengths.len());
    let long_lines_count = lengths.iter().filter(|n| **n > LONG_LINE_CHARS).count();
    let uppercase_lines_count = lines.iter().filter(|l| is_shouting(l)).count();
    let bullet_points_count = lines
        .iter()
        .filter(|l| l.trim().starts_with(BULLET_MARKERS))
        .count();
    let empty_lines = lines.iter().filter(|l| l.trim().is_empty()).count();
    let empty_lines_ratio = ratio(empty_lines as f64, lines.len());

    let mut score = 100.0 - line_length_penalty(avg_line_length);
    score -= (uppercase_lines_count as f64 * 5.0).min(20.0);
    if empty_lines_ratio > 0.3 {
        score -= 15.0;
    }
    score += (bullet_points_count as f64 * 2.0).min(10.0);

    FormattingAnalysis {
        avg_line_length: round1(avg_line_length),
        long_lines_count,
        uppercase_lines_count,
        bullet_points_count,
        empty_lines_ratio: (empty_lines_ratio * 100.0).round() / 100.0,
        score: score.clamp(0.0, 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_line_length_boundaries() {
        let exactly_80 = analyze_formatting(&"a".repeat(80));
        let exactly_100 = analyze_formatting(&"a".repeat(100));
        let above_100 = analyze_formatting(&format!("{}\n{}", "a".repeat(100), "a".repeat(101)));

        assert_eq!(exactly_80.score, 100.0);
        assert_eq!(exactly_100.score, 80.0);
        assert_eq!(above_100.avg_line_length, 100.5);
        assert_eq!(above_100.score, 60.0);
        assert_eq!(above_100.long_lines_count, 1);
    }

    #[test]
    fn test_uppercase_lines_need_letters_and_length() {
        let text = "EXPERIENCIA LABORAL\n12345678901\nCORTO\nNormal line here";
        let analysis = analyze_formatting(text);
        assert_eq!(analysis.uppercase_lines_count, 1);
        assert_eq!(analysis.score, 95.0);
    }

    #[test]
    fn test_uppercase_penalty_is_capped() {
        let text = vec!["LINEA EN MAYUSCULAS"; 6].join("\n");
        assert_eq!(analyze_formatting(&text).score, 80.0);
    }

    #[test]
    fn test_empty_line_ratio_penalty() {
        let analysis = analyze_formatting("uno\n\n\ndos");
        assert_eq!(analysis.empty_lines_ratio, 0.5);
        assert_eq!(analysis.score, 85.0);
    }

    #[test]
    fn test_bullets_counted_and_score_clamped() {
        let text = "- uno\n• dos\n* tres\n· cuatro\n  - cinco";
        let analysis = analyze_formatting(text);
        assert_eq!(analysis.bullet_points_count, 5);
        assert_eq!(analysis.score, 100.0);
    }

    #[test]
    fn test_empty_text() {
        let analysis = analyze_formatting("");
        assert_eq!(analysis.avg_line_length, 0.0);
        // the single empty line makes the ratio 1.0
        assert_eq!(analysis.score, 85.0);
    }
}
