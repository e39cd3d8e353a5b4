//! Registry of supported news sources and their extraction rules.
//!
//! Each site mixes navigation, ads and article links with no uniform pattern,
//! so every rule carries its own link filter. The filters are plain functions
//! and must stay site-specific.

use crate::error::HeadlineError;
use std::fmt;

/// Default cap on headlines per run.
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Extraction configuration bound to one news site.
#[derive(Clone, Copy)]
pub struct SourceRule {
    /// Lowercase key, unique within the registry.
    pub id: &'static str,
    /// Homepage to fetch.
    pub page_url: &'static str,
    /// CSS selector for headline nodes. This drives extraction.
    pub headline_selector: &'static str,
    /// Kept for reference only; extraction never reads it.
    pub link_selector: &'static str,
    /// Base for resolving relative hrefs.
    pub base_url: &'static str,
    /// Accepts a raw (possibly empty) href as an article link.
    pub link_filter: fn(&str) -> bool,
    pub max_items: usize,
}

impl SourceRule {
    /// Apply the site's link filter to a raw href.
    pub fn accepts(&self, href: &str) -> bool {
        (self.link_filter)(href)
    }

    /// The same rule with a different headline cap.
    pub fn with_max_items(self, max_items: usize) -> Self {
        Self { max_items, ..self }
    }
}

impl fmt::Debug for SourceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceRule")
            .field("id", &self.id)
            .field("page_url", &self.page_url)
            .field("headline_selector", &self.headline_selector)
            .field("link_selector", &self.link_selector)
            .field("base_url", &self.base_url)
            .field("max_items", &self.max_items)
            .finish()
    }
}

fn bbc_link_filter(href: &str) -> bool {
    href.starts_with("/news")
}

fn cnn_link_filter(href: &str) -> bool {
    !href.is_empty() && !href.starts_with('#')
}

fn fox_link_filter(href: &str) -> bool {
    href.starts_with('/') || href.starts_with("https://www.foxnews.com")
}

fn cbs_link_filter(href: &str) -> bool {
    href.starts_with('/') || href.starts_with("https://www.cbsnews.com")
}

fn wsj_link_filter(href: &str) -> bool {
    href.starts_with('/') || href.starts_with("https://www.wsj.com")
}

static SOURCES: [SourceRule; 5] = [
    SourceRule {
        id: "bbc",
        page_url: "https://www.bbc.com/news",
        headline_selector: r#"[data-testid="card-headline"]"#,
        link_selector: r#"a[data-testid="internal-link"]"#,
        base_url: "https://www.bbc.com",
        link_filter: bbc_link_filter,
        max_items: DEFAULT_MAX_ITEMS,
    },
    SourceRule {
        id: "cnn",
        page_url: "https://www.cnn.com",
        headline_selector: ".container__headline",
        link_selector: "a.container__link",
        base_url: "https://www.cnn.com",
        link_filter: cnn_link_filter,
        max_items: DEFAULT_MAX_ITEMS,
    },
    SourceRule {
        id: "fox",
        page_url: "https://www.foxnews.com",
        headline_selector: "h3.title a",
        link_selector: r#"a[href*="/politics/"], a[href*="/us/"], a[href*="/world/"], a[href*="/opinion/"], a[href*="/entertainment/"]"#,
        base_url: "https://www.foxnews.com",
        link_filter: fox_link_filter,
        max_items: DEFAULT_MAX_ITEMS,
    },
    SourceRule {
        id: "cbs",
        page_url: "https://www.cbsnews.com",
        headline_selector: "h4.item__hed",
        link_selector: r#"a.item__anchor, a[href*="/news/"], a[href*="/politics/"], a[href*="/world/"]"#,
        base_url: "https://www.cbsnews.com",
        link_filter: cbs_link_filter,
        max_items: DEFAULT_MAX_ITEMS,
    },
    // Every anchor on the page is a headline candidate here; the selectors were
    // never tuned for WSJ markup.
    SourceRule {
        id: "wsj",
        page_url: "https://www.wsj.com",
        headline_selector: "a",
        link_selector: "a.e1sf124z12 css-1rznr30-CardLink",
        base_url: "https://www.wsj.com",
        link_filter: wsj_link_filter,
        max_items: DEFAULT_MAX_ITEMS,
    },
];

/// All registered rules, in registry order.
pub fn all() -> &'static [SourceRule] {
    &SOURCES
}

/// Registered source identifiers, in registry order.
pub fn supported_ids() -> Vec<&'static str> {
    SOURCES.iter().map(|rule| rule.id).collect()
}

/// Look up the rule for a source identifier.
///
/// The identifier is trimmed and lowercased before matching.
///
/// # Errors
///
/// Returns [`HeadlineError::UnsupportedSource`] listing every valid identifier
/// when no rule matches.
pub fn lookup(id: &str) -> Result<SourceRule, HeadlineError> {
    let normalized = id.trim().to_lowercase();
    SOURCES
        .iter()
        .find(|rule| rule.id == normalized)
        .copied()
        .ok_or_else(|| HeadlineError::UnsupportedSource {
            requested: id.to_string(),
            valid: supported_ids(),
        })
}
