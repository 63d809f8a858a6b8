//! Web Signal Extractor.
//!
//! Fetches the company website and pulls out the signals the scorer cares
//! about: `<title>`, meta description, headings, visible text, sustainability
//! keyword hits, and links to sustainability-report PDFs.
//!
//! Parsing is a pure function over the fetched HTML ([`parse_website`]) so it
//! can be tested against inline fixtures without any network.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::SourceError;
use crate::models::WebsiteInfo;
use crate::utils::truncate_chars;
use crate::vocab::KEYWORD_VOCABULARY;

/// Hard cap on extracted visible text, in characters.
pub const TEXT_CONTENT_LIMIT: usize = 15_000;

static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static META_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());
static OG_DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:description"]"#).unwrap());
static HEADINGS: Lazy<Selector> = Lazy::new(|| Selector::parse("h1, h2, h3").unwrap());
static VISIBLE_TEXT: Lazy<Selector> = Lazy::new(|| Selector::parse("p, li, span").unwrap());
static ANCHORS: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Fetches and parses company websites.
pub struct WebsiteExtractor {
    client: reqwest::Client,
}

impl WebsiteExtractor {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch `url` and extract a [`WebsiteInfo`] from its HTML.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Fetch`] if the URL is unparseable, the request
    /// fails or times out, or the response cannot be read. The caller is
    /// expected to degrade to [`WebsiteInfo::unreachable`].
    #[instrument(level = "info", skip_all, fields(%url))]
    pub async fn extract(&self, url: &str) -> Result<WebsiteInfo, SourceError> {
        let base = Url::parse(url).map_err(|e| SourceError::Fetch(e.to_string()))?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| SourceError::Fetch(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Fetch(e.to_string()))?;

        let info = parse_website(&body, &base);
        info!(
            title = %info.title,
            keywords = info.found_keywords.len(),
            reports = info.reports.len(),
            text_chars = info.text_content.chars().count(),
            "Extracted website signals"
        );
        Ok(info)
    }
}

/// Parse fetched HTML into a [`WebsiteInfo`]. Pure, no I/O.
///
/// Relative report links are resolved against `base`, the URL the page was
/// fetched from.
pub fn parse_website(html: &str, base: &Url) -> WebsiteInfo {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let description = meta_content(&document, &META_DESCRIPTION)
        .or_else(|| meta_content(&document, &OG_DESCRIPTION))
        .unwrap_or_default();

    let headings = document
        .select(&HEADINGS)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>();

    let joined = document
        .select(&VISIBLE_TEXT)
        .map(|el| el.text().collect::<Vec<_>>().join(" "))
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let text_content = truncate_chars(&joined, TEXT_CONTENT_LIMIT);

    let lowered = text_content.to_lowercase();
    let found_keywords = KEYWORD_VOCABULARY
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect::<Vec<_>>();

    let mut reports = Vec::new();
    for element in document.select(&ANCHORS) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base.join(href) else {
            debug!(%href, "Skipping unresolvable report link");
            continue;
        };
        let resolved = resolved.to_string();
        let lowered = resolved.to_lowercase();
        if lowered.ends_with(".pdf")
            && lowered.contains("sustain")
            && !reports.contains(&resolved)
        {
            reports.push(resolved);
        }
    }

    WebsiteInfo {
        title,
        description,
        headings,
        text_content,
        found_keywords,
        reports,
        error: None,
    }
}

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
