use crate::types::Article;
use std::collections::HashMap;
use tracing::{debug, info};

/// Collapse articles that share the same story link.
///
/// The dedup key is the link lowercased with any trailing slash stripped, so
/// syndicated copies that differ only in case or a trailing `/` collapse to
/// one article. The first-seen copy is kept, except that a copy with a
/// resolved publish date replaces a kept copy whose date is unknown. Output
/// preserves first-seen order.
pub fn dedupe(articles: Vec<Article>) -> Vec<Article> {
    let total = articles.len();
    let mut kept: Vec<Article> = Vec::with_capacity(total);
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for article in articles {
        let key = dedup_key(&article.link);

        match index_by_key.get(&key) {
            None => {
                index_by_key.insert(key, kept.len());
                kept.push(article);
            }
            Some(&i) => {
                if kept[i].published.is_none() && article.published.is_some() {
                    debug!("Replacing undated duplicate for {}", article.link);
                    kept[i] = article;
                } else {
                    debug!("Removing duplicate entry: {} ({})", article.title, article.link);
                }
            }
        }
    }

    let removed = total - kept.len();
    if removed > 0 {
        info!("Removed {} duplicate articles", removed);
    }

    kept
}

fn dedup_key(link: &str) -> String {
    link.trim().to_lowercase().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_case_and_trailing_slash() {
        assert_eq!(
            dedup_key("https://Example.com/Story/"),
            dedup_key("https://example.com/story")
        );
    }
}
