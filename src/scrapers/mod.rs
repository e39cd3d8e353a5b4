//! Homepage headline scraping.
//!
//! A run follows one fixed path:
//!
//! 1. **Lookup**: resolve the source identifier to a [`SourceRule`] ([`sources`])
//! 2. **Fetching**: download the homepage with a browser user agent ([`fetch`])
//! 3. **Extraction**: select headline nodes and pair them with links ([`extract`])
//!
//! # Supported Sources
//!
//! | Source | Key | Homepage |
//! |--------|-----|----------|
//! | BBC News | `bbc` | https://www.bbc.com/news |
//! | CNN | `cnn` | https://www.cnn.com |
//! | Fox News | `fox` | https://www.foxnews.com |
//! | CBS News | `cbs` | https://www.cbsnews.com |
//! | Wall Street Journal | `wsj` | https://www.wsj.com |

pub mod extract;
pub mod fetch;
pub mod sources;

use crate::error::HeadlineError;
use crate::models::ExtractionResult;
use reqwest::Client;
use scraper::Html;
use sources::SourceRule;
use tracing::{info, instrument};

/// Fetch `rule.page_url` and extract at most `rule.max_items` headlines from it.
#[instrument(level = "info", skip(client, rule), fields(source = rule.id))]
pub async fn scrape_headlines(
    client: &Client,
    rule: &SourceRule,
) -> Result<ExtractionResult, HeadlineError> {
    let html = fetch::fetch_page(client, rule.id, rule.page_url).await?;
    let document = Html::parse_document(&html);
    let headlines = extract::extract(&document, rule)?;

    info!(
        count = headlines.len(),
        page_url = rule.page_url,
        "Scraped headlines"
    );
    Ok(headlines)
}
