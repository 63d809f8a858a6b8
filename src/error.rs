//! Signal-source error taxonomy.
//!
//! Each signal source returns `Result<T, SourceError>` so the pipeline can
//! make the degrade-on-failure policy explicit: the aggregator unwraps every
//! error into that source's safe default instead of failing the run. No
//! `SourceError` ever reaches the output boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    /// The target website could not be fetched or read.
    #[error("website fetch failed: {0}")]
    Fetch(String),

    /// The carbon-estimate service was unreachable or returned garbage.
    #[error("carbon estimate unavailable: {0}")]
    Carbon(String),

    /// The news search request failed.
    #[error("news lookup failed: {0}")]
    News(String),
}
