//! JSON output for completed analyses.

use std::error::Error;

use chrono::Local;
use tokio::fs;
use tracing::{info, instrument};

use crate::models::Analysis;

/// Write an [`Analysis`] to `{output_dir}/{company-slug}_{date}.json`.
///
/// Creates the output directory if needed and returns the path written.
#[instrument(level = "info", skip_all, fields(%output_dir, %company_name))]
pub async fn write_analysis(
    analysis: &Analysis,
    output_dir: &str,
    company_name: &str,
) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(analysis)?;

    fs::create_dir_all(output_dir).await?;
    let path = format!(
        "{}/{}_{}.json",
        output_dir.trim_end_matches('/'),
        slugify(company_name),
        Local::now().date_naive()
    );

    fs::write(&path, json).await?;
    info!(%path, "Wrote analysis JSON");
    Ok(path)
}

/// Lowercase, drop special characters, hyphenate spaces.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && c != ' ' && c != '-', "")
        .replace(' ', "-")
}
