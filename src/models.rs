//! Data models for extracted headlines.
//!
//! - [`HeadlineItem`]: one headline with its absolute article link
//! - [`ExtractionResult`]: the ordered, deduplicated, capped list from one run
//! - [`HeadlineReport`]: the serialized form printed by `--json`

use serde::{Deserialize, Serialize};

/// A headline scraped from a news homepage.
///
/// Within one extraction run `link` is unique and `headline` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeadlineItem {
    /// The trimmed visible text of the headline node.
    pub headline: String,
    /// The article URL, resolved against the source's base URL.
    pub link: String,
}

/// Headlines in document order of their first qualifying occurrence.
pub type ExtractionResult = Vec<HeadlineItem>;

/// A finished run, ready for machine-readable output.
#[derive(Debug, Deserialize, Serialize)]
pub struct HeadlineReport {
    /// The normalized source identifier, e.g. `"bbc"`.
    pub source: String,
    /// Local time the page was scraped, RFC 3339.
    pub fetched_at: String,
    pub headlines: ExtractionResult,
}
