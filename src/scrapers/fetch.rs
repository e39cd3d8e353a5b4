//! HTTP fetching of news homepages.

use crate::error::HeadlineError;
use crate::utils::truncate_for_log;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Desktop browser user agent; several sites serve bots an empty shell page.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Build the HTTP client used for a run.
///
/// Every request carries [`DEFAULT_USER_AGENT`] and is bounded by `timeout`.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

    Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
}

/// Fetch a homepage and return its body text.
///
/// # Errors
///
/// Returns [`HeadlineError::Fetch`] on connection failure, timeout, or a
/// non-success status. Nothing is retried.
#[instrument(level = "info", skip(client))]
pub async fn fetch_page(
    client: &Client,
    source_id: &str,
    url: &str,
) -> Result<String, HeadlineError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| HeadlineError::fetch(source_id, url, e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| HeadlineError::fetch(source_id, url, e))?;

    info!(%status, bytes = body.len(), "Fetched homepage");
    debug!(preview = %truncate_for_log(&body, 200), "Homepage body");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn test_client() -> Client {
        build_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_page_sends_browser_user_agent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/news")
                    .header("user-agent", DEFAULT_USER_AGENT);
                then.status(200)
                    .header("content-type", "text/html; charset=utf-8")
                    .body("<html><body>ok</body></html>");
            })
            .await;

        let body = fetch_page(&test_client(), "bbc", &server.url("/news"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(body.contains("ok"));
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(503).body("unavailable");
            })
            .await;

        let url = server.url("/");
        let err = fetch_page(&test_client(), "cnn", &url).await.unwrap_err();

        match &err {
            HeadlineError::Fetch {
                source_id,
                url: failed_url,
                source,
            } => {
                assert_eq!(source_id, "cnn");
                assert_eq!(failed_url, &url);
                assert_eq!(source.status().map(|s| s.as_u16()), Some(503));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("cnn"));
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused() {
        // Nothing listens on port 9 (discard) in the test environment.
        let err = fetch_page(&test_client(), "fox", "http://127.0.0.1:9/")
            .await
            .unwrap_err();
        assert!(matches!(err, HeadlineError::Fetch { .. }));
    }
}
