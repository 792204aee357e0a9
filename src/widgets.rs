use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::models::article::Article;
use crate::models::country::Country;
use crate::views::ViewCounter;

/// Article count per country in catalog order, zero counts included.
pub fn category_counts(catalog: &Catalog) -> Vec<(&Country, usize)> {
    catalog
        .countries
        .iter()
        .map(|c| {
            let count = catalog.articles.iter().filter(|a| a.country == c.id).count();
            (c, count)
        })
        .collect()
}

/// Most viewed articles by effective views; ties keep catalog order.
pub fn popular<'a>(
    articles: &'a [Article],
    counter: &ViewCounter<'_>,
    limit: usize,
) -> Vec<&'a Article> {
    let mut ranked: Vec<(u64, &Article)> = articles
        .iter()
        .map(|a| (counter.get_views(a), a))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().take(limit).map(|(_, a)| a).collect()
}

/// Tag frequencies across every article, most frequent first.
/// Ties keep the order in which tags were first seen.
pub fn tag_cloud(articles: &[Article], limit: usize) -> Vec<(&str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for tag in articles.iter().flat_map(|a| a.tags.iter()) {
        match index.get(tag.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(tag.as_str(), counts.len());
                counts.push((tag.as_str(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// Other articles from the same country, first `limit` in catalog order.
pub fn related<'a>(articles: &'a [Article], current: &Article, limit: usize) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| a.country == current.country && a.id != current.id)
        .take(limit)
        .collect()
}
