use clap::Parser;
use news_aggregator::{Aggregator, AggregatorError, FetchConfig, HttpFetcher, DEFAULT_LIMIT};
use serde_json::json;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_FEEDS: &[&str] = &[
    "http://rss.cnn.com/rss/cnn_topstories.rss",
    "http://feeds.bbci.co.uk/news/rss.xml",
    "https://www.theguardian.com/world/rss",
];

/// Aggregate RSS news feeds into a single ranked article list.
#[derive(Parser, Debug)]
#[command(name = "news-aggregator")]
struct Args {
    /// Feed URL to aggregate; repeat for multiple feeds
    #[arg(long = "feed-url")]
    feed_urls: Vec<String>,

    /// Maximum number of articles in the output
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Per-feed fetch timeout in seconds
    #[arg(long, default_value_t = 5)]
    timeout_seconds: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let feed_urls = if args.feed_urls.is_empty() {
        DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect()
    } else {
        args.feed_urls
    };

    info!("Starting news aggregation over {} feeds", feed_urls.len());

    let fetch_config = FetchConfig {
        timeout_seconds: args.timeout_seconds,
        ..FetchConfig::default()
    };
    let fetcher = Arc::new(HttpFetcher::new(fetch_config)?);
    let aggregator = Aggregator::new(fetcher, feed_urls).with_limit(args.limit);

    match aggregator.aggregate().await {
        Ok(aggregation) => {
            for warning in &aggregation.warnings {
                warn!("Source warning: {}", warning);
            }
            println!("{}", serde_json::to_string_pretty(&aggregation.articles)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(AggregatorError::AllSourcesFailed { failures }) => {
            let sources: serde_json::Map<_, _> = failures
                .into_iter()
                .map(|(url, e)| (url, json!(e.to_string())))
                .collect();
            let body = json!({
                "error": "no feed source was reachable",
                "sources": sources,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
