//! Human-readable headline listing.
//!
//! ```text
//!
//! Latest BBC News Headlines:
//! 1. Storm hits coast
//! Link: https://www.bbc.com/news/articles/c1
//!
//! ```
//!
//! When hyperlinks are enabled the `Link` label is wrapped in an OSC 8 escape so
//! supporting terminals make it clickable.

use crate::models::HeadlineItem;
use std::io::{self, Write};

/// Render `label` as an OSC 8 terminal hyperlink to `url`.
pub fn hyperlink(url: &str, label: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{label}\x1b]8;;\x1b\\")
}

/// Write the numbered headline list for `source_id`.
pub fn write_headlines<W: Write>(
    out: &mut W,
    source_id: &str,
    headlines: &[HeadlineItem],
    hyperlinks: bool,
) -> io::Result<()> {
    writeln!(out, "\nLatest {} News Headlines:", source_id.to_uppercase())?;
    if headlines.is_empty() {
        writeln!(out, "No headlines found.")?;
        return Ok(());
    }

    for (i, item) in headlines.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, item.headline)?;
        let label = if hyperlinks {
            hyperlink(&item.link, "Link")
        } else {
            "Link".to_string()
        };
        writeln!(out, "{label}: {}\n", item.link)?;
    }
    Ok(())
}
