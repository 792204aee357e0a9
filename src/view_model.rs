//! Display records built from catalog entities. These carry already
//! formatted strings and links; turning them into markup is `render`'s job.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::article::Article;
use crate::models::country::{label_or_empty, Country};
use crate::query::encode;
use crate::views::{format_views, ViewCounter};

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

pub fn tag_href(tag: &str) -> String {
    format!("/?tag={}", encode(tag))
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TagLink {
    pub label: String,
    pub href: String,
}

impl TagLink {
    pub fn new(tag: &str) -> Self {
        TagLink {
            label: format!("#{}", tag),
            href: tag_href(tag),
        }
    }

    pub fn for_article(article: &Article) -> Vec<Self> {
        article.tags.iter().map(|t| TagLink::new(t)).collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArticleCard {
    pub id: i64,
    pub href: String,
    pub image: String,
    pub title: String,
    pub excerpt: String,
    pub country_label: String,
    pub date: String,
    pub read_time: String,
    pub views: String,
    pub tags: Vec<TagLink>,
    pub featured: bool,
}

impl ArticleCard {
    pub fn build(
        article: &Article,
        catalog: &Catalog,
        counter: &ViewCounter<'_>,
        featured: bool,
    ) -> Self {
        ArticleCard {
            id: article.id,
            href: article.href(),
            image: article.image.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            country_label: label_or_empty(catalog.country_of(article)),
            date: format_date(article.date),
            read_time: format!("{} 分鐘閱讀", article.read_time),
            views: format!("{} 次觀看", format_views(counter.get_views(article))),
            tags: TagLink::for_article(article),
            featured,
        }
    }
}

/// Compact entry used by the popular and related lists.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArticleLink {
    pub id: i64,
    pub href: String,
    pub image: String,
    pub title: String,
    pub date: String,
}

impl From<&Article> for ArticleLink {
    fn from(a: &Article) -> Self {
        ArticleLink {
            id: a.id,
            href: a.href(),
            image: a.image.clone(),
            title: a.title.clone(),
            date: format_date(a.date),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryItem {
    pub href: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryLink {
    pub href: String,
    pub label: String,
}

impl From<&Country> for CountryLink {
    fn from(c: &Country) -> Self {
        CountryLink {
            href: c.href(),
            label: c.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NeighbourLink {
    pub href: String,
    pub title: String,
}

impl From<&Article> for NeighbourLink {
    fn from(a: &Article) -> Self {
        NeighbourLink {
            href: a.href(),
            title: a.title.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArticleDetail {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub country_href: String,
    pub country_label: String,
    pub date: String,
    pub read_time: String,
    pub views: String,
    pub tags: Vec<TagLink>,
    /// Raw HTML from the catalog.
    pub content: String,
    pub prev: Option<NeighbourLink>,
    pub next: Option<NeighbourLink>,
    pub related: Vec<ArticleLink>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum DetailPage {
    Found(Box<ArticleDetail>),
    NotFound,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Hero {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListingPage {
    pub section_title: String,
    pub hero: Hero,
    pub count_label: String,
    pub cards: Vec<ArticleCard>,
    /// Link revealing one more page, present only while pages remain.
    pub load_more: Option<String>,
}

impl ListingPage {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
