//! Error types for a single headline run.
//!
//! Every variant is terminal: a run either produces a complete (possibly empty)
//! list of headlines or fails with one of these.

use thiserror::Error;

/// Failure of one headline run.
#[derive(Debug, Error)]
pub enum HeadlineError {
    /// The requested source identifier is not in the registry.
    #[error("unsupported news source `{requested}`; try one of: {}", .valid.join(", "))]
    UnsupportedSource {
        requested: String,
        valid: Vec<&'static str>,
    },

    /// The homepage could not be downloaded (network failure, timeout, non-2xx status).
    #[error("failed to fetch {source_id} homepage {url}: {source}")]
    Fetch {
        source_id: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page was downloaded but headlines could not be extracted from it.
    #[error("failed to extract {source_id} headlines: {reason}")]
    Extraction { source_id: String, reason: String },
}

impl HeadlineError {
    pub fn fetch(
        source_id: impl Into<String>,
        url: impl Into<String>,
        source: reqwest::Error,
    ) -> Self {
        Self::Fetch {
            source_id: source_id.into(),
            url: url.into(),
            source,
        }
    }

    pub fn extraction(source_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Extraction {
            source_id: source_id.into(),
            reason: reason.into(),
        }
    }
}
