use crate::types::Article;

/// Sort articles by recency and truncate to `limit`.
///
/// Order: `published` descending with unknown dates after all known ones,
/// ties broken by `source` ascending. The sort is stable, so articles equal
/// on both keys keep their incoming (first-seen) order. A `limit` of zero
/// yields an empty list.
pub fn rank(mut articles: Vec<Article>, limit: usize) -> Vec<Article> {
    articles.sort_by(|a, b| match (&b.published, &a.published) {
        (Some(tb), Some(ta)) => tb.cmp(ta).then_with(|| a.source.cmp(&b.source)),
        (Some(_), None) => std::cmp::Ordering::Greater,
        (None, Some(_)) => std::cmp::Ordering::Less,
        (None, None) => a.source.cmp(&b.source),
    });
    articles.truncate(limit);
    articles
}
