//! Data models for the analysis pipeline.
//!
//! This module defines the value objects passed between pipeline stages:
//! - [`RawSignals`]: the merged output of the four signal sources
//! - [`WebsiteInfo`], [`CarbonInfo`], [`NewsInfo`], [`LocationInfo`]: per-source signals
//! - [`ScoreResult`]: numeric score plus ranked findings
//! - [`Report`]: human-readable synthesis of a [`ScoreResult`]
//! - [`AnalyzeRequest`] / [`Analysis`]: the request/response contract
//!
//! Every value is built once per analysis run and never mutated afterwards;
//! nothing here is shared across runs.

use serde::{Deserialize, Serialize};

/// Everything the Web Signal Extractor could read off the company website.
///
/// A failed fetch produces a degenerate value via [`WebsiteInfo::unreachable`]:
/// all fields empty and `error` carrying the reason. Downstream scoring treats
/// empty fields the same as "not found".
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WebsiteInfo {
    /// Contents of the `<title>` element, empty if absent.
    pub title: String,
    /// Meta description (`name="description"`, falling back to `og:description`).
    pub description: String,
    /// Text of `h1`/`h2`/`h3` headings in document order.
    pub headings: Vec<String>,
    /// Visible text from paragraph-like elements, capped at 15000 characters.
    pub text_content: String,
    /// Vocabulary terms found in the page text, in vocabulary order.
    pub found_keywords: Vec<String>,
    /// Absolute URLs of linked sustainability-report PDFs.
    pub reports: Vec<String>,
    /// Fetch/parse failure reason, `None` on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebsiteInfo {
    /// Degenerate value for an unreachable or unparseable website.
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            ..Self::default()
        }
    }
}

/// Estimated carbon footprint of loading the company's landing page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarbonInfo {
    /// Estimated grams of CO2 per page load. `None` means no estimate at all;
    /// the carbon source itself never produces `None` (failures become the
    /// placeholder reading instead).
    pub carbon_grams: Option<f64>,
    /// Whether the site is reported as served from green hosting.
    pub green: bool,
}

impl CarbonInfo {
    /// Fixed placeholder reading used when the estimate service is unavailable.
    pub fn placeholder() -> Self {
        Self {
            carbon_grams: Some(12.3),
            green: false,
        }
    }
}

/// Coarse sentiment label for a news headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// A single news article returned by the news search.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    /// Publication date as reported by the news API.
    pub date: String,
    pub sentiment: Sentiment,
}

/// Recent company-relevant news coverage, at most 10 articles.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewsInfo {
    pub articles: Vec<Article>,
}

impl NewsInfo {
    /// Count of articles carrying the given sentiment label.
    pub fn count_with(&self, sentiment: Sentiment) -> usize {
        self.articles
            .iter()
            .filter(|a| a.sentiment == sentiment)
            .count()
    }
}

/// Headquarters location and its climate-risk flag.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationInfo {
    pub location: String,
    pub risky_city: bool,
}

/// The merged raw-signal bundle fed to the scorer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawSignals {
    pub website: WebsiteInfo,
    pub carbon: CarbonInfo,
    pub news: NewsInfo,
    pub location: LocationInfo,
}

/// Numeric score plus the findings that produced it, in evaluation order.
///
/// The ordering of `positives`/`negatives` matters: the report synthesizer
/// surfaces the first three of each as highlights/risks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoreResult {
    /// Final score, clamped to `[0, 100]`.
    pub score: i64,
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
}

/// Human-readable synthesis of a [`ScoreResult`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Report {
    pub score: i64,
    /// Up to three leading positive findings.
    pub highlights: Vec<String>,
    /// Up to three leading negative findings.
    pub risks: Vec<String>,
    pub summary: String,
}

/// Parameters of one analysis run.
///
/// Mirrors the `POST /analyze` body: `company_name` and `location` are
/// optional and defaulted by the pipeline; `hq` is accepted as an alias
/// for `location`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyzeRequest {
    pub url: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default, alias = "hq")]
    pub location: Option<String>,
}

/// Complete analysis response: report fields plus the raw signals behind them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Analysis {
    pub score: i64,
    pub highlights: Vec<String>,
    pub risks: Vec<String>,
    pub summary: String,
    pub raw: RawSignals,
}
