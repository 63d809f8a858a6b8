//! Command-line interface definitions.
//!
//! All options can be given as flags; the news API key can also come from
//! the `NEWS_API_KEY` environment variable. Its absence is a soft degrade
//! (no news signal), never an error.

use clap::Parser;

/// Command-line arguments for the TerraTrust analyzer.
///
/// # Examples
///
/// ```sh
/// # Minimal: derive the company name from the URL, default the location
/// terratrust https://www.acme-corp.com
///
/// # Explicit company and headquarters, JSON written to a directory
/// terratrust https://www.acme-corp.com -c "Acme Corp" -l "Delhi, India" -o ./reports
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// URL of the company website to analyze
    pub url: String,

    /// Company name; derived from the URL hostname when omitted
    #[arg(short, long)]
    pub company_name: Option<String>,

    /// Headquarters location; defaults to "San Francisco" when omitted
    #[arg(short, long)]
    pub location: Option<String>,

    /// News search API key; without it the news signal is skipped
    #[arg(long, env = "NEWS_API_KEY")]
    pub news_api_key: Option<String>,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = 8)]
    pub timeout_secs: u64,

    /// Directory for the JSON report; prints to stdout when omitted
    #[arg(short, long)]
    pub output_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_minimal() {
        let cli = Cli::parse_from(["terratrust", "https://acme.com"]);
        assert_eq!(cli.url, "https://acme.com");
        assert!(cli.company_name.is_none());
        assert!(cli.location.is_none());
        assert_eq!(cli.timeout_secs, 8);
        assert!(cli.output_dir.is_none());
    }

    #[test]
    fn test_cli_full() {
        let cli = Cli::parse_from([
            "terratrust",
            "https://acme.com",
            "-c",
            "Acme Corp",
            "-l",
            "Delhi, India",
            "--timeout-secs",
            "4",
            "-o",
            "./reports",
        ]);
        assert_eq!(cli.company_name.as_deref(), Some("Acme Corp"));
        assert_eq!(cli.location.as_deref(), Some("Delhi, India"));
        assert_eq!(cli.timeout_secs, 4);
        assert_eq!(cli.output_dir.as_deref(), Some("./reports"));
    }
}
