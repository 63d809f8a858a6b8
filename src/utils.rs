//! Small pure helpers: request defaulting and string manipulation.

use tracing::debug;
use url::Url;

/// Default headquarters location when the request supplies none.
pub const DEFAULT_LOCATION: &str = "San Francisco";

/// Fallback company name when the URL yields no usable hostname.
pub const DEFAULT_COMPANY_NAME: &str = "TargetCompany";

/// Derive a display company name from a website URL.
///
/// Takes the hostname, strips a leading `www.`, keeps the segment before the
/// first dot, replaces hyphens with spaces, and title-cases the result.
/// Falls back to [`DEFAULT_COMPANY_NAME`] when the URL has no hostname.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(derive_company_name("https://www.acme-corp.com"), "Acme Corp");
/// ```
pub fn derive_company_name(url: &str) -> String {
    let derived = Url::parse(url).ok().and_then(|parsed| {
        let host = parsed.host_str()?;
        let host = host.strip_prefix("www.").unwrap_or(host);
        let segment = host.split('.').next().unwrap_or("");
        if segment.is_empty() {
            None
        } else {
            Some(title_case(&segment.replace('-', " ")))
        }
    });

    let name = derived.unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string());
    debug!(%url, %name, "Derived company name");
    name
}

/// Uppercase the first letter of each whitespace-separated word and
/// lowercase the rest.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate a string to at most `max` characters (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}
