//! News Signal Source.
//!
//! Queries a newsapi-style `/everything` endpoint for recent articles about
//! the company in an environmental context, newest first, capped at ten.
//! Each headline gets a coarse sentiment label by keyword matching.
//!
//! The API key is injected at construction; without one the source is a
//! silent no-op that returns an empty article list.

use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::SourceError;
use crate::models::{Article, NewsInfo, Sentiment};
use crate::vocab::{NEGATIVE_NEWS_TERMS, NEWS_QUERY_TERMS, POSITIVE_NEWS_TERMS};

const NEWS_API: &str = "https://newsapi.org/v2/everything";

/// Maximum number of articles kept per query.
pub const MAX_ARTICLES: usize = 10;

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<NewsResponseArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsResponseArticle {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default, rename = "publishedAt")]
    published_at: String,
}

/// Searches news coverage for a company.
pub struct NewsSource {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl NewsSource {
    /// `api_key: None` disables the source entirely (soft degrade).
    pub fn new(client: reqwest::Client, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }

    /// Fetch up to [`MAX_ARTICLES`] recent articles about `company_name`,
    /// each classified by headline sentiment.
    ///
    /// Returns an empty [`NewsInfo`] without error when no API key is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::News`] on request or parse failure; the caller
    /// degrades to an empty article list.
    #[instrument(level = "info", skip_all, fields(%company_name))]
    pub async fn fetch(&self, company_name: &str) -> Result<NewsInfo, SourceError> {
        let Some(api_key) = &self.api_key else {
            info!("No news API key configured; skipping news lookup");
            return Ok(NewsInfo::default());
        };

        let query = format!(
            "\"{}\" AND ({})",
            company_name,
            NEWS_QUERY_TERMS.join(" OR ")
        );
        let request_url = format!(
            "{}?q={}&sortBy=publishedAt&pageSize={}&apiKey={}",
            NEWS_API,
            urlencoding::encode(&query),
            MAX_ARTICLES,
            api_key
        );

        let response: NewsResponse = self
            .client
            .get(&request_url)
            .send()
            .await
            .map_err(|e| SourceError::News(e.to_string()))?
            .error_for_status()
            .map_err(|e| SourceError::News(e.to_string()))?
            .json()
            .await
            .map_err(|e| SourceError::News(e.to_string()))?;

        let articles = response
            .articles
            .into_iter()
            .take(MAX_ARTICLES)
            .map(|article| {
                let sentiment = classify_headline(&article.title);
                Article {
                    title: article.title,
                    url: article.url,
                    date: article.published_at,
                    sentiment,
                }
            })
            .collect::<Vec<_>>();

        info!(count = articles.len(), "Fetched news articles");
        Ok(NewsInfo { articles })
    }
}

/// Classify a headline by case-insensitive keyword matching.
///
/// Positive terms are checked first, so a headline matching both lexicons
/// is classified positive.
pub fn classify_headline(title: &str) -> Sentiment {
    let lowered = title.to_lowercase();
    if POSITIVE_NEWS_TERMS.iter().any(|term| lowered.contains(term)) {
        Sentiment::Positive
    } else if NEGATIVE_NEWS_TERMS.iter().any(|term| lowered.contains(term)) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_positive() {
        assert_eq!(
            classify_headline("Acme wins Renewable Energy award"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_classify_negative() {
        assert_eq!(
            classify_headline("Acme hit with pollution lawsuit"),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_classify_neutral() {
        assert_eq!(
            classify_headline("Acme announces quarterly results"),
            Sentiment::Neutral
        );
    }

    #[test]
    fn test_positive_wins_when_both_match() {
        assert_eq!(
            classify_headline("Greenwashing lawsuit targets Acme's net zero pledge"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(
            classify_headline("ACME OIL SPILL SPREADS"),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_news_response_parsing() {
        let json = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"title": "Acme pollution fine", "url": "https://news.example/1",
                 "publishedAt": "2025-06-01T10:00:00Z"},
                {"title": "Acme opens new office", "url": "https://news.example/2",
                 "publishedAt": "2025-05-30T08:00:00Z"}
            ]
        }"#;
        let response: NewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.articles.len(), 2);
        assert_eq!(response.articles[0].published_at, "2025-06-01T10:00:00Z");
        assert_eq!(
            classify_headline(&response.articles[0].title),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_news_response_missing_articles_defaults_empty() {
        let response: NewsResponse = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert!(response.articles.is_empty());
    }
}
