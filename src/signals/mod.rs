//! Signal sources feeding the scorer.
//!
//! Each submodule produces one category of raw input:
//!
//! | Signal | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Website | [`website`] | HTML scraping | Title, description, text, keywords, report PDFs |
//! | Carbon | [`carbon`] | Estimate API | Page byte size fed to a carbon calculator |
//! | News | [`news`] | Search API | Requires API key; absent key yields no articles |
//! | Location | [`location`] | Static list | Pure check, no I/O |
//!
//! # Common patterns
//!
//! The fallible sources return `Result<T, SourceError>` and make at most a
//! couple of blocking-equivalent HTTP calls, each bounded by the shared
//! client's timeout. They never retry; the pipeline absorbs every failure
//! into a safe default.

use std::time::Duration;

pub mod carbon;
pub mod location;
pub mod news;
pub mod website;

/// Build the HTTP client shared by all fallible sources.
///
/// One client, one timeout: every request made by the website, carbon, and
/// news sources is bounded by `timeout` (default 8 seconds at the CLI).
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("terratrust/", env!("CARGO_PKG_VERSION")))
        .build()
}
