//! # TerraTrust
//!
//! Estimates a sustainability/reputation score (0-100) for a company from
//! four public signals: its website, recent news coverage, an estimate of the
//! landing page's carbon footprint, and the climate risk of its headquarters
//! city.
//!
//! ## Usage
//!
//! ```sh
//! terratrust https://www.acme-corp.com -l "Delhi, India"
//! ```
//!
//! ## Architecture
//!
//! A single run is one pass through the pipeline:
//! 1. **Gather**: fetch the four raw signals sequentially; each source
//!    absorbs its own failures into a safe default
//! 2. **Score**: fold the signals into a 0-100 score with ranked findings
//! 3. **Report**: surface the top findings and a tiered summary sentence
//!
//! The result is printed as JSON (or written to `--output-dir`), matching
//! the `/analyze` response contract: score, highlights, risks, summary, and
//! the raw signals behind them.

use std::error::Error;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod error;
mod models;
mod outputs;
mod pipeline;
mod report;
mod scoring;
mod signals;
mod utils;
mod vocab;

use cli::Cli;
use models::AnalyzeRequest;
use pipeline::Analyzer;
use utils::derive_company_name;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("terratrust starting up");

    let args = Cli::parse();
    debug!(?args.url, ?args.company_name, ?args.location, "Parsed CLI arguments");

    if args.news_api_key.is_none() {
        info!("No NEWS_API_KEY configured; news signal will be empty");
    }

    let analyzer = Analyzer::new(
        Duration::from_secs(args.timeout_secs),
        args.news_api_key.clone(),
    )?;

    let request = AnalyzeRequest {
        url: args.url.clone(),
        company_name: args.company_name.clone(),
        location: args.location.clone(),
    };
    let analysis = analyzer.analyze(&request).await;

    match &args.output_dir {
        Some(output_dir) => {
            let company_name = args
                .company_name
                .clone()
                .unwrap_or_else(|| derive_company_name(&args.url));
            let path = outputs::json::write_analysis(&analysis, output_dir, &company_name).await?;
            info!(%path, score = analysis.score, "Analysis written");
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        score = analysis.score,
        "Execution complete"
    );

    Ok(())
}
