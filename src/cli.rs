//! Command-line interface definitions for News Headlines.
//!
//! Options can be given as flags or, where noted, through environment variables.

use crate::scrapers::fetch::DEFAULT_TIMEOUT_SECS;
use clap::Parser;

/// Command-line arguments for the News Headlines application.
///
/// # Examples
///
/// ```sh
/// # Ten latest BBC headlines
/// news_headlines
///
/// # Five Fox News headlines without terminal hyperlinks
/// news_headlines fox -n 5 --plain
///
/// # CNN headlines as JSON
/// news_headlines cnn --json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News source to scrape (case-insensitive): bbc, cnn, fox, cbs, wsj
    #[arg(default_value = "bbc")]
    pub source: String,

    /// Maximum number of headlines to print (0 or less uses the source's default)
    #[arg(
        short = 'n',
        long,
        env = "NEWS_HEADLINES_MAX_ITEMS",
        allow_negative_numbers = true
    )]
    pub max_items: Option<i64>,

    /// Request timeout in seconds (at least 1)
    #[arg(
        short,
        long,
        env = "NEWS_HEADLINES_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Print links as plain text instead of terminal hyperlinks
    #[arg(long)]
    pub plain: bool,

    /// Print the headlines as a JSON report
    #[arg(long, conflicts_with = "plain")]
    pub json: bool,

    /// List supported sources and exit
    #[arg(long)]
    pub list: bool,
}
