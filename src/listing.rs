use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::pager::Pager;
use crate::query::ListingQuery;
use crate::view_model::{ArticleCard, Hero, ListingPage};
use crate::views::ViewCounter;

pub const DEFAULT_SECTION_TITLE: &str = "最新文章";

/// Homepage flow: filter, sort, paginate, then build cards for the visible
/// prefix. The first visible card is marked featured.
pub fn build_listing(
    catalog: &Catalog,
    query: &ListingQuery,
    counter: &ViewCounter<'_>,
    config: &SiteConfig,
) -> ListingPage {
    let mut section_title = DEFAULT_SECTION_TITLE.to_string();
    let mut hero = Hero {
        title: config.site_name.clone(),
        description: config.tagline.clone(),
    };

    if let Some(country) = query.filter.country_filter().and_then(|id| catalog.country(id)) {
        section_title = format!("{} {}旅遊文章", country.emoji, country.name);
        hero = Hero {
            title: country.label(),
            description: country.description.clone(),
        };
    }
    if let Some(tag) = &query.filter.tag {
        section_title = format!("標籤：{}", tag);
    }
    if let Some(search) = &query.filter.search {
        section_title = format!("搜尋：{}", search);
    }

    let articles = query.filter.apply(&catalog.articles);
    let pager = Pager::at_page(&articles, config.page_size, query.page);

    let cards = pager
        .visible_slice()
        .iter()
        .enumerate()
        .map(|(i, a)| ArticleCard::build(a, catalog, counter, i == 0))
        .collect();

    let load_more = pager
        .has_more()
        .then(|| query.href_for_page(pager.current_page() + 1));

    ListingPage {
        section_title,
        hero,
        count_label: format!("共 {} 篇", articles.len()),
        cards,
        load_more,
    }
}
