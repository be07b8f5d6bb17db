use crate::types::FeedSourceResult;
use async_trait::async_trait;

/// Trait for fetching and parsing a single feed URL into raw items.
///
/// Implementations must not fail past their own boundary: network, timeout,
/// and parse failures are captured inside the returned [`FeedSourceResult`].
#[async_trait]
pub trait FetchFeed: Send + Sync {
    async fn fetch(&self, url: &str) -> FeedSourceResult;
}
