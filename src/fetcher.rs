use crate::parser;
use crate::traits::FetchFeed;
use crate::types::{FeedSourceResult, FetchConfig, FetchError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// HTTP implementation of [`FetchFeed`] over a shared reqwest client.
///
/// Every failure mode (timeout, non-2xx status, transport error, malformed
/// feed) is converted into a tagged [`FetchError`] inside the result; this
/// method has no error path of its own.
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> crate::types::Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| {
                crate::types::AggregatorError::General(format!(
                    "failed to build HTTP client: {}",
                    e
                ))
            })?;

        Ok(Self { client, config })
    }

    async fn fetch_content(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(classify_error)
    }
}

fn classify_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if let Some(status) = e.status() {
        FetchError::Http {
            status: status.as_u16(),
        }
    } else {
        FetchError::Network(e.to_string())
    }
}

#[async_trait]
impl FetchFeed for HttpFetcher {
    async fn fetch(&self, url: &str) -> FeedSourceResult {
        let start_time = Instant::now();
        debug!("Fetching feed: {}", url);

        // The client timeout covers the whole request, but an outer timeout
        // also bounds body streaming and parse of a pathologically slow feed.
        let deadline = Duration::from_secs(self.config.timeout_seconds);
        let outcome = match tokio::time::timeout(deadline, self.fetch_content(url)).await {
            Err(_) => Err(FetchError::Timeout),
            Ok(Err(e)) => Err(e),
            Ok(Ok(content)) => parser::parse_feed(&content),
        };

        let response_time_ms = start_time.elapsed().as_millis() as u64;

        match &outcome {
            Ok(feed) => info!(
                "Successfully fetched feed: {} ({} items, {}ms)",
                url,
                feed.items.len(),
                response_time_ms
            ),
            Err(e) => warn!("Failed to fetch feed {}: {}", url, e),
        }

        FeedSourceResult {
            url: url.to_string(),
            outcome,
            response_time_ms,
        }
    }
}
