use crate::traits::FetchFeed;
use crate::types::{Aggregation, AggregatorError, Article, FeedSourceResult, Result};
use crate::{dedup, normalizer, ranker};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, warn};

pub const DEFAULT_LIMIT: usize = 15;

/// Orchestrates one aggregation call: concurrent settle-all fetch of every
/// configured feed, normalization, deduplication, and recency ranking.
pub struct Aggregator {
    fetcher: Arc<dyn FetchFeed>,
    feed_urls: Vec<String>,
    limit: usize,
}

impl Aggregator {
    pub fn new(fetcher: Arc<dyn FetchFeed>, feed_urls: Vec<String>) -> Self {
        Self {
            fetcher,
            feed_urls,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Run one end-to-end aggregation.
    ///
    /// All feeds are fetched concurrently and every fetch runs to its own
    /// outcome; a failing source never cancels its siblings. Sources that
    /// fail while at least one succeeds are reported as warnings. Only when
    /// every source fails does this return an error, so callers can tell
    /// "no news" apart from "everything unreachable".
    pub async fn aggregate(&self) -> Result<Aggregation> {
        info!("Aggregating {} feeds (limit {})", self.feed_urls.len(), self.limit);

        let fetches = self.feed_urls.iter().map(|url| {
            let fetcher = self.fetcher.clone();
            let url = url.clone();
            async move { fetcher.fetch(&url).await }
        });
        let results: Vec<FeedSourceResult> = join_all(fetches).await;

        let mut articles: Vec<Article> = Vec::new();
        let mut failures = Vec::new();

        for result in results {
            match result.outcome {
                Ok(feed) => {
                    let source_name = feed
                        .source_title
                        .filter(|t| !t.trim().is_empty())
                        .unwrap_or_else(|| result.url.clone());

                    articles.extend(
                        feed.items
                            .into_iter()
                            .filter_map(|item| normalizer::normalize(item, &source_name)),
                    );
                }
                Err(e) => {
                    warn!("Source failed: {} ({})", result.url, e);
                    failures.push((result.url, e));
                }
            }
        }

        if !failures.is_empty() && failures.len() == self.feed_urls.len() {
            return Err(AggregatorError::AllSourcesFailed { failures });
        }

        let warnings = failures
            .iter()
            .map(|(url, e)| format!("{}: {}", url, e))
            .collect();

        let ranked = ranker::rank(dedup::dedupe(articles), self.limit);
        info!("Aggregation produced {} articles", ranked.len());

        Ok(Aggregation {
            articles: ranked,
            warnings,
        })
    }
}
