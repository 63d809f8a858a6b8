//! Report Synthesizer: [`ScoreResult`] to a human-readable [`Report`].
//!
//! Surfaces the first three positive findings as highlights and the first
//! three negative findings as risks, substituting a placeholder when a list
//! is empty, and builds a one-line summary with a risk-tier sentence.

use crate::models::{Report, ScoreResult};

/// Placeholder highlight when the scorer produced no positive findings.
pub const NO_HIGHLIGHTS: &str = "No notable sustainability strengths identified.";

/// Placeholder risk when the scorer produced no negative findings.
pub const NO_RISKS: &str = "No notable sustainability risks identified.";

const LOW_RISK: &str = "Overall risk level appears low based on available public signals.";
const MODERATE_RISK: &str =
    "Overall risk level appears moderate; some public signals warrant a closer look.";
const HIGH_RISK: &str =
    "Overall risk level appears high; multiple public signals raise concerns.";

/// Build the final report from a score result.
pub fn synthesize(result: &ScoreResult) -> Report {
    let highlights = top_three(&result.positives, NO_HIGHLIGHTS);
    let risks = top_three(&result.negatives, NO_RISKS);

    let tier = if result.score >= 75 {
        LOW_RISK
    } else if result.score >= 45 {
        MODERATE_RISK
    } else {
        HIGH_RISK
    };
    let summary = format!("TerraTrust Score: {}/100. {}", result.score, tier);

    Report {
        score: result.score,
        highlights,
        risks,
        summary,
    }
}

fn top_three(findings: &[String], placeholder: &str) -> Vec<String> {
    if findings.is_empty() {
        vec![placeholder.to_string()]
    } else {
        findings.iter().take(3).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: i64, positives: &[&str], negatives: &[&str]) -> ScoreResult {
        ScoreResult {
            score,
            positives: positives.iter().map(|s| s.to_string()).collect(),
            negatives: negatives.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_takes_first_three_findings() {
        let report = synthesize(&result(60, &["a", "b", "c", "d"], &["x", "y", "z", "w"]));
        assert_eq!(report.highlights, vec!["a", "b", "c"]);
        assert_eq!(report.risks, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_placeholders_only_when_lists_empty() {
        let report = synthesize(&result(50, &[], &[]));
        assert_eq!(report.highlights, vec![NO_HIGHLIGHTS]);
        assert_eq!(report.risks, vec![NO_RISKS]);

        let report = synthesize(&result(50, &["a"], &["x"]));
        assert_eq!(report.highlights, vec!["a"]);
        assert_eq!(report.risks, vec!["x"]);
    }

    #[test]
    fn test_lists_never_exceed_three() {
        let many: Vec<&str> = (0..10).map(|_| "finding").collect();
        let report = synthesize(&result(80, &many, &many));
        assert!(report.highlights.len() <= 3);
        assert!(report.risks.len() <= 3);
    }

    #[test]
    fn test_summary_contains_score() {
        let report = synthesize(&result(77, &["a"], &[]));
        assert!(report.summary.starts_with("TerraTrust Score: 77/100."));
    }

    #[test]
    fn test_tier_boundaries() {
        assert!(synthesize(&result(75, &[], &[])).summary.contains("low"));
        assert!(synthesize(&result(74, &[], &[])).summary.contains("moderate"));
        assert!(synthesize(&result(45, &[], &[])).summary.contains("moderate"));
        assert!(synthesize(&result(44, &[], &[])).summary.contains("high"));
        assert!(synthesize(&result(0, &[], &[])).summary.contains("high"));
        assert!(synthesize(&result(100, &[], &[])).summary.contains("low"));
    }

    #[test]
    fn test_scenario_score_77_is_low_risk() {
        let report = synthesize(&result(77, &["keywords", "report"], &[]));
        assert!(report.summary.contains("low"));
    }

    #[test]
    fn test_scenario_score_0_is_high_risk() {
        let report = synthesize(&result(0, &[], &["everything"]));
        assert!(report.summary.contains("high"));
    }
}
