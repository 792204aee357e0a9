use crate::models::article::Article;
use crate::query::parse_leading_int;
use crate::store::KeyValueStore;

/// Storage key holding the local view overlay for an article.
pub fn view_key(article_id: i64) -> String {
    format!("views_{}", article_id)
}

/// Decodes a stored overlay. Unparseable or negative values count as 0.
pub fn parse_overlay(raw: &str) -> u64 {
    parse_leading_int(raw)
        .filter(|n| *n > 0)
        .map(|n| n as u64)
        .unwrap_or(0)
}

/// Effective view counts: catalog baseline plus the locally stored overlay.
///
/// Reads and writes are not atomic; two tabs incrementing the same article
/// at once can lose one increment.
pub struct ViewCounter<'s> {
    store: &'s dyn KeyValueStore,
}

impl<'s> ViewCounter<'s> {
    pub fn new(store: &'s dyn KeyValueStore) -> Self {
        ViewCounter { store }
    }

    pub fn overlay(&self, article_id: i64) -> u64 {
        self.store
            .get(&view_key(article_id))
            .map(|v| parse_overlay(&v))
            .unwrap_or(0)
    }

    pub fn get_views(&self, article: &Article) -> u64 {
        article.views.saturating_add(self.overlay(article.id))
    }

    pub fn increment_views(&self, article_id: i64) {
        let next = self.overlay(article_id).saturating_add(1);
        self.store.set(&view_key(article_id), &next.to_string());
    }
}

/// 10,000 and up render as tens of thousands with one decimal ("1.2萬"),
/// halves rounding up; smaller counts get thousands separators.
pub fn format_views(n: u64) -> String {
    if n >= 10_000 {
        let tenths = n.saturating_add(500) / 1_000;
        return format!("{}.{}萬", tenths / 10, tenths % 10);
    }
    group_thousands(n)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
