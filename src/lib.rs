pub mod aggregator;
pub mod dedup;
pub mod fetcher;
pub mod normalizer;
pub mod parser;
pub mod ranker;
pub mod traits;
pub mod types;

pub use aggregator::{Aggregator, DEFAULT_LIMIT};
pub use fetcher::HttpFetcher;
pub use traits::FetchFeed;
pub use types::*;
