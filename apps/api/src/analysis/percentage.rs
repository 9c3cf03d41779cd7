//! Best-effort extraction of the relevance percentage from the model's
//! free-form evaluation text. The text itself is never altered or validated;
//! when no recognizable figure is present the result is simply `None`.

use std::sync::OnceLock;

use regex::Regex;

fn relevance_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)Relevance Percentage:\s*([\d.]+)%").expect("valid regex")
    })
}

fn score_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)Total Score:\s*(\d+)\s*(?:/|out of)\s*(\d+)").expect("valid regex")
    })
}

/// Looks for a `Relevance Percentage: XX%` line; failing that, computes a
/// percentage from a `Total Score: X/Y` (or `X out of Y`) line.
pub fn extract_match_percentage(text: &str) -> Option<f32> {
    if let Some(caps) = relevance_re().captures(text) {
        return caps[1].parse::<f32>().ok();
    }

    let caps = score_re().captures(text)?;
    let obtained: f32 = caps[1].parse().ok()?;
    let max: f32 = caps[2].parse().ok()?;
    if max == 0.0 {
        return None;
    }
    Some(((obtained / max) * 100.0 * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_relevance_percentage_line() {
        let text = "The candidate is a strong fit.\nRelevance Percentage: 85%";
        assert_eq!(extract_match_percentage(text), Some(85.0));
    }

    #[test]
    fn test_extracts_decimal_percentage() {
        let text = "Partial match.\nRelevance Percentage: 66.7%";
        assert_eq!(extract_match_percentage(text), Some(66.7));
    }

    #[test]
    fn test_percentage_match_is_case_insensitive() {
        let text = "relevance percentage: 40%";
        assert_eq!(extract_match_percentage(text), Some(40.0));
    }

    #[test]
    fn test_falls_back_to_total_score_slash() {
        let text = "Decent resume overall. Total Score: 7/10";
        assert_eq!(extract_match_percentage(text), Some(70.0));
    }

    #[test]
    fn test_falls_back_to_total_score_out_of() {
        let text = "Total Score: 7 out of 10";
        assert_eq!(extract_match_percentage(text), Some(70.0));
    }

    #[test]
    fn test_total_score_rounds_to_two_decimals() {
        let text = "Total Score: 2/3";
        assert_eq!(extract_match_percentage(text), Some(66.67));
    }

    #[test]
    fn test_zero_max_score_yields_none() {
        assert_eq!(extract_match_percentage("Total Score: 3/0"), None);
    }

    #[test]
    fn test_no_recognizable_figure_yields_none() {
        let text = "The candidate seems well suited for the role.";
        assert_eq!(extract_match_percentage(text), None);
    }

    #[test]
    fn test_relevance_line_wins_over_total_score() {
        let text = "Total Score: 5/10\nRelevance Percentage: 80%";
        assert_eq!(extract_match_percentage(text), Some(80.0));
    }
}
