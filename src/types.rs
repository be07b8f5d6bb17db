use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical article record produced by one aggregation call.
///
/// Every field is guaranteed present: `link` is never empty, `title` falls
/// back to a placeholder, and an unknown publish date is an explicit `None`
/// (serialized as `null`) rather than a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub published: Option<DateTime<Utc>>,
    pub summary: String,
    pub source: String,
}

/// Dialect-neutral raw feed item, before any validation or normalization.
/// Field presence varies by feed dialect; the normalizer applies the
/// field-mapping policy.
#[derive(Debug, Clone, Default)]
pub struct RawItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub guid: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub summary: Option<String>,
}

/// Successfully fetched and parsed feed content.
#[derive(Debug, Clone)]
pub struct FetchedFeed {
    pub source_title: Option<String>,
    pub items: Vec<RawItem>,
}

/// Per-source outcome. Failure is data here, never a propagated error, so one
/// bad feed cannot abort the batch.
#[derive(Debug)]
pub struct FeedSourceResult {
    pub url: String,
    pub outcome: std::result::Result<FetchedFeed, FetchError>,
    pub response_time_ms: u64,
}

/// Per-source fetch failure taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("timed out")]
    Timeout,

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("feed parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "News-Aggregator/1.0".to_string(),
            timeout_seconds: 5,
            max_redirects: 5,
        }
    }
}

/// Final response of one aggregation call. `warnings` lists sources that
/// failed while at least one other succeeded; it is omitted from JSON when
/// every source was healthy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aggregation {
    pub articles: Vec<Article>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("all {} sources failed", failures.len())]
    AllSourcesFailed { failures: Vec<(String, FetchError)> },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
