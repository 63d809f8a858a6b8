//! Domain policy data: keyword vocabularies and city lists.
//!
//! These lists are policy, not logic — the thresholds and matching code live
//! in `signals/` and `scoring.rs`, while the terms themselves are collected
//! here so they can be revised without touching any algorithm. All matching
//! against these lists is case-insensitive substring containment.

/// Sustainability terms scanned for in website text, in reporting order.
///
/// `WebsiteInfo::found_keywords` is always a subset of this list and
/// preserves this ordering.
pub const KEYWORD_VOCABULARY: &[&str] = &[
    "sustainability",
    "esg",
    "carbon",
    "renewable",
    "climate",
    "net zero",
    "emissions",
    "recycling",
    "solar",
    "wind power",
    "biodiversity",
    "circular economy",
];

/// Cities considered high climate risk for a company headquarters.
pub const RISKY_CITIES: &[&str] = &[
    "Beijing", "Delhi", "Lagos", "Jakarta", "Dhaka", "Manila",
];

/// Headline terms that classify a news article as positive coverage.
/// Checked before [`NEGATIVE_NEWS_TERMS`]; a headline matching both lists
/// is classified positive.
pub const POSITIVE_NEWS_TERMS: &[&str] = &[
    "award",
    "renewable",
    "green",
    "sustainab",
    "carbon neutral",
    "net zero",
    "clean energy",
    "pledge",
];

/// Headline terms that classify a news article as negative coverage.
pub const NEGATIVE_NEWS_TERMS: &[&str] = &[
    "lawsuit",
    "spill",
    "pollution",
    "fine",
    "violation",
    "scandal",
    "greenwash",
    "protest",
];

/// Environmental terms OR-ed into the news search query alongside the
/// company name.
pub const NEWS_QUERY_TERMS: &[&str] = &[
    "sustainability",
    "climate",
    "emissions",
    "environment",
    "esg",
];
