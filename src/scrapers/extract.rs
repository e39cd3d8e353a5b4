//! Headline extraction from a parsed homepage.
//!
//! Headline nodes are selected with the rule's `headline_selector`. Each node is
//! paired with its link-bearing element (the node itself when it is an `<a>`,
//! otherwise its nearest `<a>` ancestor), filtered through the rule's link
//! filter, resolved against the base URL, and deduplicated by link.

use crate::error::HeadlineError;
use crate::models::{ExtractionResult, HeadlineItem};
use crate::scrapers::sources::SourceRule;
use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument, trace};
use url::Url;

/// Extract at most `rule.max_items` headlines from `document` using `rule`.
///
/// Callers apply a run's cap override with [`SourceRule::with_max_items`].
///
/// Output is in document order of the first qualifying occurrence of each link.
/// A document with no matching headline nodes yields an empty result.
///
/// # Errors
///
/// Returns [`HeadlineError::Extraction`] if the headline selector or the base URL
/// cannot be parsed.
#[instrument(
    level = "info",
    skip(document, rule),
    fields(source = rule.id, max_items = rule.max_items)
)]
pub fn extract(document: &Html, rule: &SourceRule) -> Result<ExtractionResult, HeadlineError> {
    let selector_text = rule.headline_selector.trim();
    let selector = Selector::parse(selector_text).map_err(|e| {
        HeadlineError::extraction(
            rule.id,
            format!("invalid headline selector `{selector_text}`: {e}"),
        )
    })?;
    let base_url = Url::parse(rule.base_url).map_err(|e| {
        HeadlineError::extraction(rule.id, format!("invalid base URL `{}`: {e}", rule.base_url))
    })?;

    let headlines: ExtractionResult = document
        .select(&selector)
        .filter_map(|node| headline_from_node(node, rule, &base_url))
        .unique_by(|item| item.link.clone())
        .take(rule.max_items)
        .collect();

    debug!(count = headlines.len(), "Extracted headlines");
    Ok(headlines)
}

/// Build a headline from one matched node, or `None` if it does not qualify.
fn headline_from_node(
    node: ElementRef<'_>,
    rule: &SourceRule,
    base_url: &Url,
) -> Option<HeadlineItem> {
    let Some(anchor) = link_bearing_element(node) else {
        trace!("Headline node has no enclosing link");
        return None;
    };

    let headline = node.text().collect::<String>().trim().to_string();
    let href = anchor.value().attr("href").unwrap_or_default();
    if headline.is_empty() || !rule.accepts(href) {
        trace!(href, "Skipping headline node");
        return None;
    }
    if href.is_empty() {
        return None;
    }

    match base_url.join(href) {
        Ok(link) => Some(HeadlineItem {
            headline,
            link: link.to_string(),
        }),
        Err(e) => {
            debug!(href, error = %e, "Could not resolve headline link");
            None
        }
    }
}

/// The node itself if it is a hyperlink, otherwise its nearest hyperlink ancestor.
fn link_bearing_element(node: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if node.value().name() == "a" {
        return Some(node);
    }
    node.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
}
