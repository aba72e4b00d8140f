use std::time::Duration;

use futures::StreamExt;
use thiserror::Error;

use crate::feed::parser::{parse_feed, FeedItem};
use crate::feed::query::query_parameters;
use crate::text::sanitize_all;

/// Request timeout for the feed endpoint.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
/// Response body cap; the DeviantArt feed is a few hundred KB at most.
const MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors that can occur while fetching and parsing the feed.
///
/// The UI surfaces all of these as a single "fetch failed" condition; the
/// variants exist for logs and tests. There is no retry on any of them.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with a non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the 30-second timeout
    #[error("request timed out")]
    Timeout,
    /// Response body exceeded the size cap
    #[error("response too large")]
    ResponseTooLarge,
    /// Feed XML could not be parsed as RSS or Atom
    #[error("parse error: {0}")]
    Parse(String),
}

/// Fetch the feed for one search submission.
///
/// Builds the `q` parameter from `raw_query` (see
/// [`query_parameters`](crate::feed::query_parameters)), performs a single
/// GET against `feed_url`, parses the body, and sanitizes every item before
/// returning. The returned list is ready for rendering as-is; on any error
/// the caller keeps whatever it was already showing.
pub async fn fetch_feed(
    client: &reqwest::Client,
    feed_url: &str,
    raw_query: Option<&str>,
) -> Result<Vec<FeedItem>, FetchError> {
    let params = query_parameters(raw_query);

    let response = tokio::time::timeout(FETCH_TIMEOUT, client.get(feed_url).query(&params).send())
        .await
        .map_err(|_| FetchError::Timeout)?
        .map_err(FetchError::Network)?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus(response.status().as_u16()));
    }

    let bytes = read_limited_bytes(response, MAX_FEED_SIZE).await?;

    let mut items = parse_feed(&bytes).map_err(|e| FetchError::Parse(e.to_string()))?;
    sanitize_all(&mut items);

    tracing::debug!(items = items.len(), query = ?raw_query, "Feed fetched");
    Ok(items)
}

/// Read a response body, failing once it grows past `limit`.
async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
