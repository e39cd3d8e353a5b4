//! # News Headlines
//!
//! Fetches a news site's homepage, extracts headline text and article links
//! using per-site CSS selector rules, and prints a deduplicated, capped list.
//!
//! ## Usage
//!
//! ```sh
//! news_headlines cnn -n 5
//! ```
//!
//! ## Pipeline
//!
//! 1. **Lookup**: resolve the source key to its extraction rule
//! 2. **Fetching**: download the homepage (one request, no retries)
//! 3. **Extraction**: select headlines, attach links, dedupe, cap
//! 4. **Output**: numbered terminal listing or a JSON report

use clap::Parser;
use std::error::Error;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use error::HeadlineError;
use outputs::{json, terminal};
use scrapers::{fetch, sources};
use utils::effective_max_items;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    let start_time = std::time::Instant::now();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        for rule in sources::all() {
            writeln!(out, "{:<5} {}", rule.id, rule.page_url)?;
        }
        return Ok(());
    }

    // Unknown sources fail here, before any network activity.
    let rule = sources::lookup(&args.source)?;
    let rule = rule.with_max_items(effective_max_items(rule.max_items, args.max_items));
    info!(source = rule.id, max_items = rule.max_items, "Resolved source rule");

    let client = fetch::build_client(Duration::from_secs(args.timeout_secs))
        .map_err(|e| HeadlineError::fetch(rule.id, rule.page_url, e))?;
    let headlines = scrapers::scrape_headlines(&client, &rule).await?;

    if args.json {
        let report = json::build_report(rule.id, headlines);
        json::write_report(&mut out, &report)?;
    } else {
        let hyperlinks = !args.plain && stdout.is_terminal();
        terminal::write_headlines(&mut out, rule.id, &headlines, hyperlinks)?;
        writeln!(out)?;
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}
