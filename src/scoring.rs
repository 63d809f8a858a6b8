//! The scoring fold: [`RawSignals`] to [`ScoreResult`].
//!
//! A linear point system starting from a baseline of 50. Each adjustment
//! appends a human-readable finding to `positives` or `negatives` in
//! evaluation order; that ordering decides which findings the report
//! synthesizer later surfaces as highlights and risks. The final score is
//! clamped to `[0, 100]`.
//!
//! Pure and deterministic: identical signals always produce identical
//! results.

use crate::models::{RawSignals, ScoreResult, Sentiment};

/// Score every company starts from before adjustments.
pub const BASELINE_SCORE: i64 = 50;

/// Fold a raw-signal bundle into a score and its findings.
pub fn calculate_score(raw: &RawSignals) -> ScoreResult {
    let mut score = BASELINE_SCORE;
    let mut positives = Vec::new();
    let mut negatives = Vec::new();

    // Sustainability language on the website: +5 per keyword, capped at +20.
    let keyword_count = raw.website.found_keywords.len() as i64;
    if keyword_count > 0 {
        score += (5 * keyword_count).min(20);
        positives.push(format!(
            "Sustainability language found on site: {}",
            raw.website.found_keywords.join(", ")
        ));
    } else {
        score -= 5;
        negatives.push("No sustainability-related language found on the website".to_string());
    }

    // Linked sustainability-report PDFs. No penalty when absent.
    if !raw.website.reports.is_empty() {
        score += 10;
        positives.push(format!(
            "Published sustainability report linked on site ({} PDF{})",
            raw.website.reports.len(),
            if raw.website.reports.len() == 1 { "" } else { "s" }
        ));
    }

    // Basic site hygiene. Both penalties can apply at once.
    if raw.website.title.is_empty() {
        score -= 5;
        negatives.push("Website has no title".to_string());
    }
    if raw.website.description.is_empty() {
        score -= 3;
        negatives.push("Website has no meta description".to_string());
    }

    // Page carbon footprint tiers. No adjustment without an estimate.
    if let Some(grams) = raw.carbon.carbon_grams {
        if grams < 20.0 {
            score += 10;
            positives.push(format!(
                "Low estimated page carbon footprint ({grams:.1} g per load)"
            ));
        } else if grams < 100.0 {
            score += 2;
            positives.push(format!(
                "Moderate estimated page carbon footprint ({grams:.1} g per load)"
            ));
        } else {
            score -= 10;
            negatives.push(format!(
                "High estimated page carbon footprint ({grams:.1} g per load)"
            ));
        }
    }

    if raw.carbon.green {
        score += 5;
        positives.push("Site is served from green hosting".to_string());
    }

    // News coverage: -7 per negative headline (capped at -20), then
    // +5 per positive headline (capped at +10). Both can apply.
    let negative_articles = raw.news.count_with(Sentiment::Negative) as i64;
    if negative_articles > 0 {
        score -= (7 * negative_articles).min(20);
        negatives.push(format!(
            "{negative_articles} recent news article{} with negative environmental coverage",
            if negative_articles == 1 { "" } else { "s" }
        ));
    }
    let positive_articles = raw.news.count_with(Sentiment::Positive) as i64;
    if positive_articles > 0 {
        score += (5 * positive_articles).min(10);
        positives.push(format!(
            "{positive_articles} recent news article{} with positive environmental coverage",
            if positive_articles == 1 { "" } else { "s" }
        ));
    }

    // Headquarters climate risk.
    if raw.location.risky_city {
        score -= 10;
        negatives.push(format!(
            "Headquarters location \"{}\" is on the climate-risk city list",
            raw.location.location
        ));
    } else {
        score += 2;
        positives.push("Headquarters location is outside known climate-risk cities".to_string());
    }

    ScoreResult {
        score: score.clamp(0, 100),
        positives,
        negatives,
    }
}
