use log::debug;

use crate::catalog::Catalog;
use crate::models::article::Article;
use crate::models::country::label_or_empty;
use crate::view_model::{
    format_date, ArticleDetail, ArticleLink, DetailPage, NeighbourLink, TagLink,
};
use crate::views::{format_views, ViewCounter};
use crate::widgets;

/// Neighbours of an article by id value (`id - 1`, `id + 1`), not by date
/// or by position in any listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacent<'a> {
    pub prev: Option<&'a Article>,
    pub next: Option<&'a Article>,
}

pub fn adjacent(catalog: &Catalog, id: i64) -> Adjacent<'_> {
    Adjacent {
        prev: id.checked_sub(1).and_then(|p| catalog.article(p)),
        next: id.checked_add(1).and_then(|n| catalog.article(n)),
    }
}

/// Builds the detail page for `id`. A found article has its view overlay
/// incremented once before the count is read, so the page shows the new
/// value.
pub fn build_detail(
    catalog: &Catalog,
    id: Option<i64>,
    counter: &ViewCounter<'_>,
    related_limit: usize,
) -> DetailPage {
    let article = match id.and_then(|id| catalog.article(id)) {
        Some(a) => a,
        None => {
            debug!("Article not found for id {:?}", id);
            return DetailPage::NotFound;
        }
    };

    debug!("Rendering article {}", article.id);
    counter.increment_views(article.id);
    let views = counter.get_views(article);

    let country = catalog.country_of(article);
    let Adjacent { prev, next } = adjacent(catalog, article.id);

    DetailPage::Found(Box::new(ArticleDetail {
        id: article.id,
        title: article.title.clone(),
        image: article.image.clone(),
        country_href: format!("/?country={}", crate::query::encode(&article.country)),
        country_label: label_or_empty(country),
        date: format_date(article.date),
        read_time: format!("{} 分鐘閱讀", article.read_time),
        views: format!("{} 次觀看", format_views(views)),
        tags: TagLink::for_article(article),
        content: article.content.clone(),
        prev: prev.map(NeighbourLink::from),
        next: next.map(NeighbourLink::from),
        related: widgets::related(&catalog.articles, article, related_limit)
            .into_iter()
            .map(ArticleLink::from)
            .collect(),
    }))
}
