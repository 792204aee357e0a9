use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Article {
    pub id: i64,
    pub country: String,
    pub title: String,
    pub excerpt: String,
    /// Pre-rendered HTML, inserted into the detail page as-is.
    pub content: String,
    pub image: String,
    pub date: NaiveDate,
    #[serde(rename = "readTime", alias = "read_time")]
    pub read_time: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Baseline view count shipped with the catalog.
    #[serde(default)]
    pub views: u64,
}

impl Article {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match against title, excerpt or any tag.
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    pub fn href(&self) -> String {
        format!("/article?id={}", self.id)
    }
}
