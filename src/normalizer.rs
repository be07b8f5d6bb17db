use crate::types::{Article, RawItem};
use tracing::debug;
use url::Url;

const UNTITLED: &str = "(untitled)";

/// Map a raw feed item into a canonical [`Article`].
///
/// Field-mapping policy:
/// - title: item title, or a placeholder when absent/blank
/// - link: item link, falling back to a guid that parses as an absolute URL;
///   items with neither are rejected
/// - published: carried over as-is; unknown stays `None`
/// - summary: HTML-stripped summary/description, or empty
/// - source: caller-provided feed identity
pub fn normalize(raw: RawItem, source_name: &str) -> Option<Article> {
    let link = match resolve_link(&raw) {
        Some(link) => link,
        None => {
            debug!(
                "Dropping item without link (title: {:?})",
                raw.title.as_deref().unwrap_or(UNTITLED)
            );
            return None;
        }
    };

    let title = raw
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    let summary = raw
        .summary
        .map(|s| strip_html(&s))
        .unwrap_or_default();

    Some(Article {
        title,
        link,
        published: raw.published,
        summary,
        source: source_name.to_string(),
    })
}

fn resolve_link(raw: &RawItem) -> Option<String> {
    if let Some(link) = raw.link.as_ref().filter(|l| !l.trim().is_empty()) {
        return Some(link.clone());
    }

    // Many feeds carry the permalink in the guid; accept it only when it is a
    // navigable URL, since Atom ids are often opaque (tag: URIs, hashes).
    raw.guid.as_ref().filter(|g| is_http_url(g)).cloned()
}

fn is_http_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}

/// Extract plain text from HTML-flavored summaries.
fn strip_html(html: &str) -> String {
    html.chars()
        .fold((String::new(), false), |(mut text, in_tag), c| match c {
            '<' => (text, true),
            '>' => (text, false),
            _ if !in_tag => {
                text.push(c);
                (text, in_tag)
            }
            _ => (text, in_tag),
        })
        .0
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        let text = strip_html("<p>Breaking: <b>markets</b>  rally</p>\n");
        assert_eq!(text, "Breaking: markets rally");
    }

    #[test]
    fn opaque_guid_is_not_a_link() {
        let raw = RawItem {
            guid: Some("tag:example.org,2024:entry-1".to_string()),
            ..Default::default()
        };
        assert!(normalize(raw, "Example").is_none());
    }
}
