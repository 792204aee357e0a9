use crate::models::article::Article;

/// Country value meaning "no country filter".
pub const ALL_COUNTRIES: &str = "all";

/// Listing filters. Every present filter applies; absent ones are no-ops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFilter {
    pub country: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl ArticleFilter {
    pub fn country_filter(&self) -> Option<&str> {
        self.country.as_deref().filter(|c| *c != ALL_COUNTRIES)
    }

    /// Filters the catalog by country, then tag, then search text, and sorts
    /// the survivors newest first. Equal dates keep catalog order.
    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        let mut out: Vec<&Article> = articles.iter().collect();

        if let Some(country) = self.country_filter() {
            out.retain(|a| a.country == country);
        }

        if let Some(tag) = self.tag.as_deref() {
            out.retain(|a| a.has_tag(tag));
        }

        if let Some(search) = self.search.as_deref() {
            let needle = search.to_lowercase();
            out.retain(|a| a.matches_search(&needle));
        }

        // Vec::sort_by is stable.
        out.sort_by(|a, b| b.date.cmp(&a.date));
        out
    }
}
