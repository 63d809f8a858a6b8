//! Carbon Signal Source.
//!
//! Estimates the CO2 cost of loading the company's landing page: one GET to
//! measure the page's byte size, then one call to a websitecarbon-style
//! `/data` endpoint with that byte count. Green hosting is pinned to "not
//! green" in the query pending a real hosting lookup, but the flag in the
//! response is trusted as-is.
//!
//! Failures never propagate: the pipeline swaps any error for the fixed
//! placeholder reading ([`CarbonInfo::placeholder`], 12.3 g / not green).

use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::SourceError;
use crate::models::CarbonInfo;

const CARBON_API: &str = "https://api.websitecarbon.com/data";

/// Response shape of the carbon-estimate endpoint (the subset we read).
#[derive(Debug, Deserialize)]
struct CarbonEstimate {
    statistics: CarbonStatistics,
    #[serde(default)]
    green: bool,
}

#[derive(Debug, Deserialize)]
struct CarbonStatistics {
    co2: Co2,
}

#[derive(Debug, Deserialize)]
struct Co2 {
    grid: GridCo2,
}

#[derive(Debug, Deserialize)]
struct GridCo2 {
    grams: f64,
}

/// Queries the carbon-estimate service for a page's footprint.
pub struct CarbonSource {
    client: reqwest::Client,
    endpoint: String,
}

impl CarbonSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: CARBON_API.to_string(),
        }
    }

    /// Estimate the per-load carbon footprint of `url`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Carbon`] on any network or parse failure; the
    /// caller degrades to the placeholder reading.
    #[instrument(level = "info", skip_all, fields(%url))]
    pub async fn estimate(&self, url: &str) -> Result<CarbonInfo, SourceError> {
        let page_bytes = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Carbon(e.to_string()))?
            .bytes()
            .await
            .map_err(|e| SourceError::Carbon(e.to_string()))?
            .len();

        let estimate_url = format!("{}?bytes={}&green=0", self.endpoint, page_bytes);
        let estimate: CarbonEstimate = self
            .client
            .get(&estimate_url)
            .send()
            .await
            .map_err(|e| SourceError::Carbon(e.to_string()))?
            .error_for_status()
            .map_err(|e| SourceError::Carbon(e.to_string()))?
            .json()
            .await
            .map_err(|e| SourceError::Carbon(e.to_string()))?;

        let grams = estimate.statistics.co2.grid.grams;
        info!(page_bytes, grams, green = estimate.green, "Carbon estimate received");
        Ok(CarbonInfo {
            carbon_grams: Some(grams),
            green: estimate.green,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_response_parsing() {
        let json = r#"{
            "cleanerThan": 0.82,
            "statistics": {
                "adjustedBytes": 558094,
                "energy": 0.00042,
                "co2": {
                    "grid": {"grams": 0.186, "litres": 0.103},
                    "renewable": {"grams": 0.161, "litres": 0.089}
                }
            },
            "green": false
        }"#;
        let estimate: CarbonEstimate = serde_json::from_str(json).unwrap();
        assert_eq!(estimate.statistics.co2.grid.grams, 0.186);
        assert!(!estimate.green);
    }

    #[test]
    fn test_estimate_response_missing_green_defaults_false() {
        let json = r#"{
            "statistics": {"co2": {"grid": {"grams": 2.5}}}
        }"#;
        let estimate: CarbonEstimate = serde_json::from_str(json).unwrap();
        assert_eq!(estimate.statistics.co2.grid.grams, 2.5);
        assert!(!estimate.green);
    }

    #[test]
    fn test_malformed_response_is_an_error() {
        let result = serde_json::from_str::<CarbonEstimate>(r#"{"green": true}"#);
        assert!(result.is_err());
    }
}
