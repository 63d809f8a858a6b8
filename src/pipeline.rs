//! The analysis pipeline: gather signals, score, synthesize.
//!
//! [`Analyzer`] drives the four signal sources sequentially, absorbs each
//! failure into that source's safe default, and folds the result through the
//! scorer and report synthesizer. A run never fails because one source did;
//! the output is always a complete [`Analysis`].

use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::error::SourceError;
use crate::models::{
    Analysis, AnalyzeRequest, CarbonInfo, NewsInfo, RawSignals, WebsiteInfo,
};
use crate::report;
use crate::scoring;
use crate::signals::{self, carbon::CarbonSource, location, news::NewsSource, website::WebsiteExtractor};
use crate::utils::{derive_company_name, DEFAULT_LOCATION};

/// Runs the full signal-collection and scoring pipeline.
pub struct Analyzer {
    website: WebsiteExtractor,
    carbon: CarbonSource,
    news: NewsSource,
}

impl Analyzer {
    /// Build an analyzer with its own HTTP client.
    ///
    /// `timeout` bounds every individual HTTP call; `news_api_key` is
    /// injected into the news source (absent key = no news lookups).
    pub fn new(
        timeout: Duration,
        news_api_key: Option<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = signals::build_http_client(timeout)?;
        Ok(Self {
            website: WebsiteExtractor::new(client.clone()),
            carbon: CarbonSource::new(client.clone()),
            news: NewsSource::new(client, news_api_key),
        })
    }

    /// Run one analysis end to end.
    ///
    /// Missing request fields are defaulted here: the company name is derived
    /// from the URL hostname and the location falls back to
    /// [`DEFAULT_LOCATION`].
    #[instrument(level = "info", skip_all, fields(url = %request.url))]
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Analysis {
        let company_name = request
            .company_name
            .clone()
            .unwrap_or_else(|| derive_company_name(&request.url));
        let location = request
            .location
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        info!(%company_name, %location, "Starting analysis");

        let raw = self.gather(&request.url, &company_name, &location).await;
        let result = scoring::calculate_score(&raw);
        let report = report::synthesize(&result);
        info!(score = report.score, "Analysis complete");

        Analysis {
            score: report.score,
            highlights: report.highlights,
            risks: report.risks,
            summary: report.summary,
            raw,
        }
    }

    /// Collect all four signals sequentially, degrading failures to defaults.
    async fn gather(&self, url: &str, company_name: &str, location: &str) -> RawSignals {
        let website = website_or_degenerate(self.website.extract(url).await);
        let carbon = carbon_or_placeholder(self.carbon.estimate(url).await);
        let news = news_or_empty(self.news.fetch(company_name).await);
        let location = location::assess(location);
        RawSignals {
            website,
            carbon,
            news,
            location,
        }
    }
}

/// Degrade policy for the website source: keep the failure reason visible
/// inside the signal, everything else empty.
fn website_or_degenerate(result: Result<WebsiteInfo, SourceError>) -> WebsiteInfo {
    result.unwrap_or_else(|e| {
        warn!(error = %e, "Website extraction failed; using degenerate signal");
        WebsiteInfo::unreachable(e.to_string())
    })
}

/// Degrade policy for the carbon source: fixed placeholder reading.
fn carbon_or_placeholder(result: Result<CarbonInfo, SourceError>) -> CarbonInfo {
    result.unwrap_or_else(|e| {
        warn!(error = %e, "Carbon estimate failed; using placeholder reading");
        CarbonInfo::placeholder()
    })
}

/// Degrade policy for the news source: empty article list.
fn news_or_empty(result: Result<NewsInfo, SourceError>) -> NewsInfo {
    result.unwrap_or_else(|e| {
        warn!(error = %e, "News lookup failed; continuing without articles");
        NewsInfo::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, Sentiment};

    #[test]
    fn test_website_degrade_keeps_error_reason() {
        let degraded =
            website_or_degenerate(Err(SourceError::Fetch("connect timeout".to_string())));
        let error = degraded.error.expect("degenerate signal carries the reason");
        assert!(error.contains("connect timeout"));
        assert!(degraded.title.is_empty());
    }

    #[test]
    fn test_website_success_passes_through() {
        let info = WebsiteInfo {
            title: "Acme".to_string(),
            ..WebsiteInfo::default()
        };
        let passed = website_or_degenerate(Ok(info));
        assert_eq!(passed.title, "Acme");
        assert!(passed.error.is_none());
    }

    #[test]
    fn test_carbon_degrade_is_placeholder() {
        let degraded = carbon_or_placeholder(Err(SourceError::Carbon("503".to_string())));
        assert_eq!(degraded.carbon_grams, Some(12.3));
        assert!(!degraded.green);
    }

    #[test]
    fn test_carbon_success_passes_through() {
        let passed = carbon_or_placeholder(Ok(CarbonInfo {
            carbon_grams: Some(0.5),
            green: true,
        }));
        assert_eq!(passed.carbon_grams, Some(0.5));
        assert!(passed.green);
    }

    #[test]
    fn test_news_degrade_is_empty() {
        let degraded = news_or_empty(Err(SourceError::News("401".to_string())));
        assert!(degraded.articles.is_empty());
    }

    #[test]
    fn test_news_success_passes_through() {
        let passed = news_or_empty(Ok(NewsInfo {
            articles: vec![Article {
                title: "Acme wins award".to_string(),
                url: "https://news.example/1".to_string(),
                date: "2025-06-01".to_string(),
                sentiment: Sentiment::Positive,
            }],
        }));
        assert_eq!(passed.articles.len(), 1);
    }
}
