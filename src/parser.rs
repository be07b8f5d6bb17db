use crate::types::{FetchError, FetchedFeed, RawItem};
use chrono::Utc;
use feed_rs::parser;
use tracing::debug;

/// Parse raw RSS/Atom content into a dialect-neutral [`FetchedFeed`].
///
/// Only structural parsing happens here; field validation and the canonical
/// mapping are the normalizer's job.
pub fn parse_feed(content: &str) -> Result<FetchedFeed, FetchError> {
    debug!("Parsing feed content ({} bytes)", content.len());

    let feed = parser::parse(content.as_bytes())
        .map_err(|e| FetchError::Parse(format!("failed to parse feed: {}", e)))?;

    let source_title = feed.title.map(|t| t.content);
    let items = feed.entries.into_iter().map(parse_entry).collect::<Vec<_>>();

    debug!("Parsed feed with {} entries", items.len());

    Ok(FetchedFeed { source_title, items })
}

fn parse_entry(entry: feed_rs::model::Entry) -> RawItem {
    let title = entry.title.map(|t| t.content);
    let link = entry.links.first().map(|l| l.href.clone());
    let guid = if entry.id.is_empty() { None } else { Some(entry.id) };
    let summary = entry.summary.map(|s| s.content);

    // RSS dialects disagree on pubDate vs updated; take whichever is present.
    let published = entry
        .published
        .or(entry.updated)
        .map(|dt| dt.with_timezone(&Utc));

    RawItem {
        title,
        link,
        guid,
        published,
        summary,
    }
}
